//! Monotonic tick clock and wraparound-safe deadlines.
//!
//! Ticks are milliseconds in a `u32`, wrapping roughly every 49.7 days.
//! The controller runs until power-off, so every deadline comparison must
//! survive the counter wrapping: [`Clock::is_past`] compares by signed
//! difference, never by raw magnitude.
//!
//! Production code uses [`crate::adapters::time::EspClock`]; tests drive
//! virtual time through [`SimClock`].

/// Tick rate of the scheduling clock.
pub const TICKS_PER_SECOND: u32 = 1_000;

/// An instant on the monotonic tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticks(u32);

impl Ticks {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// An opaque scheduling deadline.
///
/// Produced by [`Clock::future_secs`]; the only meaningful query is
/// [`Clock::is_past`].  A deadline is never cancelled, only superseded or
/// re-read as already due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Ticks);

/// Read-only monotonic time source shared by the whole controller.
pub trait Clock {
    /// Current monotonic tick count.
    fn now(&self) -> Ticks;

    /// A deadline `secs` seconds from now (wrapping).
    fn future_secs(&self, secs: u32) -> Deadline {
        Deadline(Ticks(
            self.now().0.wrapping_add(secs.wrapping_mul(TICKS_PER_SECOND)),
        ))
    }

    /// A deadline that is due immediately.
    fn already_due(&self) -> Deadline {
        Deadline(self.now())
    }

    /// Whether `deadline` lies in the past.
    ///
    /// Signed-difference compare: correct for any deadline within half the
    /// counter range (~24.8 days) of now, on either side of a wrap.
    fn is_past(&self, deadline: Deadline) -> bool {
        self.now().0.wrapping_sub(deadline.0.raw()) as i32 >= 0
    }
}

/// Manually advanced clock for host-side tests and simulation.
pub struct SimClock {
    now: core::cell::Cell<u32>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Start the counter at an arbitrary raw tick value, e.g. just below
    /// the wrap point.
    pub fn starting_at(raw: u32) -> Self {
        Self {
            now: core::cell::Cell::new(raw),
        }
    }

    pub fn advance_ms(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn advance_secs(&self, secs: u32) {
        self.advance_ms(secs.wrapping_mul(TICKS_PER_SECOND));
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimClock {
    fn now(&self) -> Ticks {
        Ticks(self.now.get())
    }
}
