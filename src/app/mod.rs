//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the DustGate system:
//! request resolution, the idle-linger policy, and the staggered output
//! sequencer, orchestrated per iteration by [`service::Controller`].
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
