//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`GateBankDriver`] and reads the gate-switch lines, exposing
//! both through [`SwitchPort`] and [`ActuatorPort`].  This is the only
//! module in the system that touches actual hardware.  On non-espidf
//! targets, the underlying GPIO helpers are simulation stubs.

use crate::app::ports::{ActuatorPort, SwitchPort};
use crate::drivers::gates::GateBankDriver;
use crate::drivers::hw_init;
use crate::pins;
use crate::signals::{ActuatorSet, LineLevels};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    gates: GateBankDriver,
}

impl HardwareAdapter {
    pub fn new(gates: GateBankDriver) -> Self {
        Self { gates }
    }
}

// ── SwitchPort implementation ─────────────────────────────────

impl SwitchPort for HardwareAdapter {
    fn sample(&mut self) -> LineLevels {
        // One register read per line.  The pull-ups make a floating or
        // disconnected switch read high — "no request".
        let mut levels = LineLevels::quiescent();
        for line in &pins::INPUT_LINES {
            levels.set(line.request, hw_init::gpio_read(line.gpio));
        }
        levels
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn apply(&mut self, outputs: ActuatorSet) {
        self.gates.apply(outputs);
    }
}
