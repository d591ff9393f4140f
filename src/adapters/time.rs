//! ESP32 clock adapter.
//!
//! Provides the monotonic tick source for the DustGate scheduler.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic),
//!   truncated to millisecond ticks in a wrapping `u32`.
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.

use crate::clock::{Clock, Ticks};

/// Clock adapter for the ESP32-S3 platform.
pub struct EspClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for EspClock {
    fn default() -> Self {
        Self::new()
    }
}

impl EspClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl Clock for EspClock {
    #[cfg(target_os = "espidf")]
    fn now(&self) -> Ticks {
        // SAFETY: esp_timer_get_time is a monotonic counter read.
        let us = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        Ticks::new((us / 1_000) as u32)
    }

    #[cfg(not(target_os = "espidf"))]
    fn now(&self) -> Ticks {
        Ticks::new(self.start.elapsed().as_millis() as u32)
    }
}
