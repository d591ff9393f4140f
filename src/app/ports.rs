//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (the GPIO block, the relay bank, event sinks)
//! implement these traits.  The [`Controller`](super::service::Controller)
//! consumes them via generics, so the domain core never touches hardware
//! directly and the whole decision engine runs against test doubles.

use crate::signals::{ActuatorSet, LineLevels};

// ───────────────────────────────────────────────────────────────
// Switch port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one bus sample of the gate-switch input lines.
///
/// Implementations return the raw line levels; polarity normalisation is
/// domain logic ([`crate::control::input`]), not an adapter concern.
pub trait SwitchPort {
    fn sample(&mut self) -> LineLevels;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: drive every output line to match `outputs`.
///
/// The sequencer is the only caller and changes at most one actuator
/// between consecutive calls; implementations may rely on that but must
/// still write the full set (the wire state is re-asserted, not diffed).
pub trait ActuatorPort {
    fn apply(&mut self, outputs: ActuatorSet);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a display or radio later).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
