//! GPIO line assignments for the DustGate main board.
//!
//! Single source of truth — every driver references these tables rather
//! than hard-coding pin numbers.  Change a pin here and it propagates
//! everywhere.
//!
//! Input lines come from the gate-position microswitches, wired to ground
//! through the switch with the internal pull-up enabled: a closed switch
//! pulls the line LOW to signal "gate open, extraction requested".
//!
//! Output lines drive the gate relay board (inverted inputs — energise by
//! driving LOW) and the collector motor contactor (true sense).

use crate::signals::{Actuator, MachineRequest};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// One gate-switch input line.  Active-low, internal pull-up.
#[derive(Debug, Clone, Copy)]
pub struct InputLine {
    pub request: MachineRequest,
    pub gpio: i32,
}

pub const INPUT_LINES: [InputLine; 4] = [
    InputLine {
        request: MachineRequest::DrillPressOrRouter,
        gpio: 4,
    },
    InputLine {
        request: MachineRequest::TableSaw,
        gpio: 5,
    },
    InputLine {
        request: MachineRequest::Planer,
        gpio: 6,
    },
    InputLine {
        request: MachineRequest::MiterSaw,
        gpio: 7,
    },
];

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// One actuator output line.
///
/// `active_low` lines are energised by driving the pin LOW (the relay
/// board inputs are opto-isolated and inverted); the gate bank driver
/// XORs the logical state onto the wire.  The decision logic never sees
/// this inversion.
#[derive(Debug, Clone, Copy)]
pub struct OutputLine {
    pub actuator: Actuator,
    pub gpio: i32,
    pub active_low: bool,
}

pub const OUTPUT_LINES: [OutputLine; 5] = [
    OutputLine {
        actuator: Actuator::MainTrunkGate,
        gpio: 10,
        active_low: true,
    },
    OutputLine {
        actuator: Actuator::DrillRouterTrunkGate,
        gpio: 11,
        active_low: true,
    },
    OutputLine {
        actuator: Actuator::MiterSawPlanerTrunkGate,
        gpio: 12,
        active_low: true,
    },
    OutputLine {
        actuator: Actuator::MiterSawGate,
        gpio: 13,
        active_low: true,
    },
    // Motor contactor driver is true-sense, unlike the relay board.
    OutputLine {
        actuator: Actuator::CollectorMotor,
        gpio: 14,
        active_low: false,
    },
];
