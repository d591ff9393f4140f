//! Gate relay bank and collector contactor driver.
//!
//! Applies a full [`ActuatorSet`] to the output lines each call, XORing
//! each logical state against its line's drive sense (the relay board
//! inputs are active-low, the motor contactor is true-sense — see
//! [`crate::pins::OUTPUT_LINES`]).
//!
//! This is a dumb actuator: the one-at-a-time switching policy lives in
//! [`crate::control::sequencer`], not here.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;
use crate::signals::ActuatorSet;

pub struct GateBankDriver {
    applied: ActuatorSet,
}

impl GateBankDriver {
    /// Lines are parked de-energised by `hw_init` before this exists.
    pub fn new() -> Self {
        Self {
            applied: ActuatorSet::ALL_OFF,
        }
    }

    /// Drive every output line to match `outputs`.
    pub fn apply(&mut self, outputs: ActuatorSet) {
        for line in &pins::OUTPUT_LINES {
            let on = outputs.contains(line.actuator);
            hw_init::gpio_write(line.gpio, on ^ line.active_low);
        }
        self.applied = outputs;
    }

    /// De-energise everything.
    pub fn all_off(&mut self) {
        self.apply(ActuatorSet::ALL_OFF);
    }

    /// Output set as last written to the wire.
    pub fn applied(&self) -> ActuatorSet {
        self.applied
    }
}

impl Default for GateBankDriver {
    fn default() -> Self {
        Self::new()
    }
}
