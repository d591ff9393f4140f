//! Decision and actuation engine — pure logic, zero I/O.
//!
//! Per iteration: [`input`] normalises the sampled line levels into a
//! request set, [`resolver`] maps it to a desired actuator configuration
//! (with [`linger`] taking over when no machine is requesting), and
//! [`sequencer`] walks the physical outputs toward the target one
//! actuator per cadence.

pub mod input;
pub mod linger;
pub mod resolver;
pub mod sequencer;
