//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).  A display or radio
//! adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | requests=0b{:04b} | outputs=0b{:05b} target=0b{:05b} | \
                     motor={} | {} | switches={} | ticks={}",
                    t.requests.bits(),
                    t.outputs.bits(),
                    t.target.bits(),
                    if t.motor_on { "ON" } else { "off" },
                    if t.converged { "stable" } else { "converging" },
                    t.switch_count,
                    t.tick_count,
                );
            }
            AppEvent::TargetChanged { requests, target } => {
                info!("TARGET | {:?} <- requests 0b{:04b}", target, requests.bits());
            }
            AppEvent::LingerScheduled { secs } => {
                info!("LINGER | motor shutoff in {}s, gates held", secs);
            }
            AppEvent::ActuatorChanged {
                actuator,
                on,
                outputs,
            } => {
                info!(
                    "SWITCH | {} {} | outputs=0b{:05b}",
                    actuator,
                    if *on { "on" } else { "off" },
                    outputs.bits(),
                );
            }
            AppEvent::Started(outputs) => {
                info!("START | outputs=0b{:05b}", outputs.bits());
            }
        }
    }
}
