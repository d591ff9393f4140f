//! Idle-linger policy for the collector motor.
//!
//! When every gate switch has released but the motor is still running,
//! shutting it down immediately would make brief pauses between cuts
//! cycle the motor.  Instead the target keeps the gates exactly as they
//! are, drops only the motor, and the shutoff is pushed out by the linger
//! interval.
//!
//! The returned deadline *replaces* the sequencer's pending deadline —
//! the stagger cadence and the linger share one deadline slot, which is
//! what makes the shutoff wait the full interval instead of the next
//! cadence tick.

use crate::clock::{Clock, Deadline};
use crate::signals::{Actuator, ActuatorSet};

pub struct IdleLingerTimer {
    linger_secs: u32,
}

impl IdleLingerTimer {
    pub fn new(linger_secs: u32) -> Self {
        Self { linger_secs }
    }

    pub fn linger_secs(&self) -> u32 {
        self.linger_secs
    }

    /// Invoked only while the request set is empty.
    ///
    /// On the first idle iteration with the motor physically running
    /// (the target still shows it on), returns the replacement target —
    /// `current` with only the motor cleared — and the deferred shutoff
    /// deadline.  On every later idle iteration the target already has
    /// the motor cleared and the previously scheduled deadline stands,
    /// so this returns `None`.  With the motor off it is a no-op.
    pub fn on_idle(
        &self,
        current: ActuatorSet,
        target: ActuatorSet,
        clock: &impl Clock,
    ) -> Option<(ActuatorSet, Deadline)> {
        if !current.contains(Actuator::CollectorMotor) {
            return None;
        }
        if !target.contains(Actuator::CollectorMotor) {
            return None;
        }
        Some((
            current.without(Actuator::CollectorMotor),
            clock.future_secs(self.linger_secs),
        ))
    }
}
