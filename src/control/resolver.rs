//! Fixed-priority request resolver.
//!
//! The routing table below maps the single winning request to the full
//! set of gates that must be open for its duct run, plus the collector
//! motor.  The first asserted request in priority order determines the
//! whole target — lower-priority requests are ignored outright, never
//! merged, so two machines can't hold half the trunk open each.

use crate::signals::{Actuator, ActuatorSet, MachineRequest, RequestSet};

/// Duct routing, highest-priority request first.
const ROUTES: [(MachineRequest, ActuatorSet); 4] = [
    (
        MachineRequest::DrillPressOrRouter,
        ActuatorSet::ALL_OFF
            .with(Actuator::DrillRouterTrunkGate)
            .with(Actuator::CollectorMotor),
    ),
    (
        MachineRequest::TableSaw,
        ActuatorSet::ALL_OFF
            .with(Actuator::MainTrunkGate)
            .with(Actuator::CollectorMotor),
    ),
    (
        MachineRequest::Planer,
        ActuatorSet::ALL_OFF
            .with(Actuator::MainTrunkGate)
            .with(Actuator::MiterSawPlanerTrunkGate)
            .with(Actuator::CollectorMotor),
    ),
    (
        MachineRequest::MiterSaw,
        ActuatorSet::ALL_OFF
            .with(Actuator::MainTrunkGate)
            .with(Actuator::MiterSawPlanerTrunkGate)
            .with(Actuator::MiterSawGate)
            .with(Actuator::CollectorMotor),
    ),
];

/// Resolve the asserted requests to a target configuration.
///
/// Returns `None` when nothing is requested — the idle-linger policy
/// owns the target in that case.
pub fn resolve(requests: RequestSet) -> Option<ActuatorSet> {
    ROUTES
        .iter()
        .find(|(request, _)| requests.contains(*request))
        .map(|(_, target)| *target)
}
