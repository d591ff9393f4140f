//! Staggered actuator sequencer.
//!
//! Gate relays and the motor contactor must never switch in the same
//! instant — simultaneous pull-in current on a shared supply browns out
//! the logic rail.  The sequencer therefore flips at most one actuator
//! per cadence interval, walking `current` toward `target` one bit at a
//! time, lowest-significance bit first.
//!
//! The pending deadline doubles as the idle-linger shutoff timer (see
//! [`crate::control::linger`]): [`ActuatorSequencer::defer_until`]
//! overwrites it, and until it passes no output changes at all — even if
//! the target has since moved on.

use log::debug;

use crate::app::ports::ActuatorPort;
use crate::clock::{Clock, Deadline};
use crate::signals::{Actuator, ActuatorSet};

pub struct ActuatorSequencer {
    /// Physical output state.  Mutated here and nowhere else, at most one
    /// bit per step.
    current: ActuatorSet,
    /// Next instant a transition is allowed.
    next_deadline: Deadline,
    cadence_secs: u32,
}

impl ActuatorSequencer {
    /// Outputs start all-off; the first transition is allowed immediately.
    pub fn new(cadence_secs: u32, clock: &impl Clock) -> Self {
        Self {
            current: ActuatorSet::ALL_OFF,
            next_deadline: clock.already_due(),
            cadence_secs,
        }
    }

    /// Physical output state as last applied.
    pub fn outputs(&self) -> ActuatorSet {
        self.current
    }

    /// Replace the pending deadline (idle-linger path).
    pub fn defer_until(&mut self, deadline: Deadline) {
        self.next_deadline = deadline;
    }

    /// Move one step toward `target` if the cadence allows.
    ///
    /// Returns the actuator flipped and its new state, or `None` when the
    /// deadline has not passed or the outputs already match.  A stable
    /// state does *not* advance the deadline, so the next divergence is
    /// acted on without cadence delay.
    pub fn advance(
        &mut self,
        target: ActuatorSet,
        clock: &impl Clock,
        out: &mut impl ActuatorPort,
    ) -> Option<(Actuator, bool)> {
        if !clock.is_past(self.next_deadline) {
            return None;
        }

        let actuator = self.current.diff(target).lowest()?;
        self.current.toggle(actuator);
        out.apply(self.current);
        self.next_deadline = clock.future_secs(self.cadence_secs);

        let on = self.current.contains(actuator);
        debug!(
            "sequencer: {} -> {} (outputs=0b{:05b})",
            actuator,
            if on { "on" } else { "off" },
            self.current.bits()
        );
        Some((actuator, on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SimClock;

    /// Records every applied output set.
    #[derive(Default)]
    struct RecordingPort {
        writes: Vec<ActuatorSet>,
    }

    impl ActuatorPort for RecordingPort {
        fn apply(&mut self, outputs: ActuatorSet) {
            self.writes.push(outputs);
        }
    }

    fn target_full_run() -> ActuatorSet {
        ActuatorSet::ALL_OFF
            .with(Actuator::MainTrunkGate)
            .with(Actuator::MiterSawPlanerTrunkGate)
            .with(Actuator::MiterSawGate)
            .with(Actuator::CollectorMotor)
    }

    #[test]
    fn first_transition_is_immediate() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();

        let flipped = seq.advance(target_full_run(), &clock, &mut port);
        assert_eq!(flipped, Some((Actuator::MainTrunkGate, true)));
        assert_eq!(port.writes.len(), 1);
    }

    #[test]
    fn one_actuator_per_cadence_tick() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();
        let target = target_full_run();

        assert!(seq.advance(target, &clock, &mut port).is_some());
        // Same instant: cadence not elapsed, nothing moves.
        assert!(seq.advance(target, &clock, &mut port).is_none());
        assert_eq!(port.writes.len(), 1);

        // Each elapsed second buys exactly one more flip.
        for expected in 2..=4 {
            clock.advance_secs(1);
            assert!(seq.advance(target, &clock, &mut port).is_some());
            assert_eq!(port.writes.len(), expected);
        }
        assert_eq!(seq.outputs(), target);
    }

    #[test]
    fn lowest_bit_flips_first() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();
        let target = target_full_run();

        let mut order = Vec::new();
        loop {
            if let Some((actuator, _)) = seq.advance(target, &clock, &mut port) {
                order.push(actuator);
            }
            if seq.outputs() == target {
                break;
            }
            clock.advance_secs(1);
        }

        assert_eq!(
            order,
            vec![
                Actuator::MainTrunkGate,
                Actuator::MiterSawPlanerTrunkGate,
                Actuator::MiterSawGate,
                Actuator::CollectorMotor,
            ]
        );
    }

    #[test]
    fn motor_switches_last_on_the_way_up() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();
        let target = target_full_run();

        while seq.outputs() != target {
            seq.advance(target, &clock, &mut port);
            clock.advance_secs(1);
        }
        // The motor must not appear in any write except the final one.
        for write in &port.writes[..port.writes.len() - 1] {
            assert!(!write.contains(Actuator::CollectorMotor));
        }
    }

    #[test]
    fn stable_state_writes_nothing_and_keeps_deadline_due() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();
        let target = ActuatorSet::ALL_OFF.with(Actuator::MainTrunkGate);

        seq.advance(target, &clock, &mut port);
        clock.advance_secs(5);
        for _ in 0..100 {
            assert!(seq.advance(target, &clock, &mut port).is_none());
        }
        assert_eq!(port.writes.len(), 1);

        // Deadline was not advanced while stable: a new divergence is
        // acted on in the very same iteration it appears.
        let retarget = target.with(Actuator::CollectorMotor);
        assert!(seq.advance(retarget, &clock, &mut port).is_some());
    }

    #[test]
    fn turning_off_staggers_too() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();
        let target = target_full_run();

        while seq.outputs() != target {
            seq.advance(target, &clock, &mut port);
            clock.advance_secs(1);
        }
        port.writes.clear();

        let off = ActuatorSet::ALL_OFF;
        while seq.outputs() != off {
            let before = seq.outputs();
            if seq.advance(off, &clock, &mut port).is_some() {
                assert_eq!(before.diff(seq.outputs()).count(), 1);
            }
            clock.advance_secs(1);
        }
        assert_eq!(port.writes.len(), 4);
    }

    #[test]
    fn deferred_deadline_blocks_all_motion() {
        let clock = SimClock::new();
        let mut seq = ActuatorSequencer::new(1, &clock);
        let mut port = RecordingPort::default();

        seq.defer_until(clock.future_secs(10));
        let target = target_full_run();

        for _ in 0..9 {
            assert!(seq.advance(target, &clock, &mut port).is_none());
            clock.advance_secs(1);
        }
        clock.advance_secs(1);
        assert!(seq.advance(target, &clock, &mut port).is_some());
    }
}
