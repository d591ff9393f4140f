//! Outbound application events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today they go to the serial log.

use crate::signals::{Actuator, ActuatorSet, RequestSet};

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller has started (carries the initial output state).
    Started(ActuatorSet),

    /// The resolver computed a new desired output configuration.
    TargetChanged {
        requests: RequestSet,
        target: ActuatorSet,
    },

    /// All requests released with the motor running; shutoff scheduled
    /// `secs` out, gates frozen as they stand.
    LingerScheduled { secs: u32 },

    /// The sequencer flipped one actuator.
    ActuatorChanged {
        actuator: Actuator,
        on: bool,
        outputs: ActuatorSet,
    },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub requests: RequestSet,
    pub target: ActuatorSet,
    pub outputs: ActuatorSet,
    pub motor_on: bool,
    pub converged: bool,
    pub switch_count: u32,
    pub tick_count: u64,
}
