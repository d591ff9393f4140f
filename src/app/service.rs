//! Application service — the hexagonal core.
//!
//! [`Controller`] owns the decision engine and the physical-output
//! sequencer.  It exposes a clean, hardware-agnostic API; all I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters and a simulated clock.
//!
//! ```text
//!  SwitchPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │          Controller           │
//! ActuatorPort ◀──│  resolve · linger · sequence  │
//!                 └──────────────────────────────┘
//! ```

use log::info;

use crate::clock::Clock;
use crate::config::SystemConfig;
use crate::control::linger::IdleLingerTimer;
use crate::control::sequencer::ActuatorSequencer;
use crate::control::{input, resolver};
use crate::diagnostics::SwitchHistory;
use crate::signals::{Actuator, ActuatorSet, RequestSet};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SwitchPort};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
///
/// `target` is recomputed every iteration from the sampled requests (or
/// by the linger policy when they are empty); the sequencer moves the
/// physical outputs toward it asynchronously, one actuator per cadence.
pub struct Controller {
    linger: IdleLingerTimer,
    sequencer: ActuatorSequencer,
    target: ActuatorSet,
    requests: RequestSet,
    history: SwitchHistory,
    tick_count: u64,
}

impl Controller {
    /// Construct the service from configuration.  Outputs and target
    /// start all-off.
    pub fn new(config: &SystemConfig, clock: &impl Clock) -> Self {
        Self {
            linger: IdleLingerTimer::new(u32::from(config.linger_secs)),
            sequencer: ActuatorSequencer::new(u32::from(config.stagger_cadence_secs), clock),
            target: ActuatorSet::ALL_OFF,
            requests: RequestSet::EMPTY,
            history: SwitchHistory::new(),
            tick_count: 0,
        }
    }

    /// Announce startup.  Call once before the first [`tick`](Self::tick).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.sequencer.outputs()));
        info!("controller started, all outputs off");
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one full control cycle: sample → resolve → sequence.
    ///
    /// The `hw` parameter satisfies **both** [`SwitchPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SwitchPort + ActuatorPort),
        clock: &impl Clock,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sample the gate switches and normalise polarity.
        let requests = input::normalize(hw.sample());
        self.requests = requests;

        // 2. Recompute the target; an empty request set hands the target
        //    to the idle-linger policy instead.
        match resolver::resolve(requests) {
            Some(target) => {
                if target != self.target {
                    info!(
                        "target: {:?} for requests 0b{:04b}",
                        target,
                        requests.bits()
                    );
                    sink.emit(&AppEvent::TargetChanged { requests, target });
                }
                self.target = target;
            }
            None => {
                if let Some((target, deadline)) =
                    self.linger
                        .on_idle(self.sequencer.outputs(), self.target, clock)
                {
                    self.target = target;
                    // One shared deadline: the linger wait replaces the
                    // stagger cadence, so *any* later target change also
                    // waits for it.
                    self.sequencer.defer_until(deadline);
                    info!(
                        "idle: motor shutoff in {}s, gates held as-is",
                        self.linger.linger_secs()
                    );
                    sink.emit(&AppEvent::LingerScheduled {
                        secs: self.linger.linger_secs(),
                    });
                }
            }
        }

        // 3. At most one actuator moves per cadence.
        if let Some((actuator, on)) = self.sequencer.advance(self.target, clock, hw) {
            self.history.record(actuator, on, clock.now());
            sink.emit(&AppEvent::ActuatorChanged {
                actuator,
                on,
                outputs: self.sequencer.outputs(),
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            requests: self.requests,
            target: self.target,
            outputs: self.sequencer.outputs(),
            motor_on: self.sequencer.outputs().contains(Actuator::CollectorMotor),
            converged: self.sequencer.outputs() == self.target,
            switch_count: self.history.total_switches(),
            tick_count: self.tick_count,
        }
    }

    /// Physical output state as last applied.
    pub fn outputs(&self) -> ActuatorSet {
        self.sequencer.outputs()
    }

    /// Desired output state as last computed.
    pub fn target(&self) -> ActuatorSet {
        self.target
    }

    /// Requests as sampled on the latest tick.
    pub fn requests(&self) -> RequestSet {
        self.requests
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
