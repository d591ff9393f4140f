//! Task Watchdog Timer (TWDT) driver.
//!
//! The control loop never blocks, so a stalled loop means something is
//! badly wrong (runaway IDF task, hardware fault).  The TWDT resets the
//! device if `feed()` stops arriving.  The timeout must comfortably
//! exceed the poll interval; the default gives three orders of margin.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Default watchdog timeout.
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Reconfigure the TWDT and subscribe the current task.
    pub fn new(timeout_secs: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: TWDT reconfigure/add are called once from the main
            // task before the control loop starts.
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms: timeout_secs * 1_000,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!("watchdog: reconfigure returned {}", ret);
                }

                let subscribed = esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK;
                if subscribed {
                    log::info!("watchdog: armed, {}s timeout", timeout_secs);
                } else {
                    log::warn!("watchdog: subscribe failed, running unprotected");
                }
                Self { subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            let _ = timeout_secs;
            log::info!("watchdog(sim): no-op");
            Self {}
        }
    }

    /// Feed the watchdog.  Called every control loop iteration.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: task was subscribed in new(); reset is a register write.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_SECS)
    }
}
