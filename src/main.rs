//! DustGate Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single non-blocking polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  HardwareAdapter          LogEventSink      EspClock       │
//! │  (Switch+Actuator)        (EventSink)       (Clock)        │
//! │                                                            │
//! │  ───────────── Port Trait Boundary ─────────────────       │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │            Controller (pure logic)               │      │
//! │  │  resolve · linger · sequence                     │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use dustgate::adapters::hardware::HardwareAdapter;
use dustgate::adapters::log_sink::LogEventSink;
use dustgate::adapters::time::EspClock;
use dustgate::app::events::AppEvent;
use dustgate::app::ports::EventSink;
use dustgate::app::service::Controller;
use dustgate::config::SystemConfig;
use dustgate::drivers;
use dustgate::drivers::gates::GateBankDriver;
use dustgate::drivers::watchdog::{Watchdog, DEFAULT_TIMEOUT_SECS};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("DustGate v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new(DEFAULT_TIMEOUT_SECS);

    // ── 3. Configuration (volatile, defaults only) ────────────
    let config = SystemConfig::default();
    config.validate()?;

    // ── 4. Construct adapters ─────────────────────────────────
    let clock = EspClock::new();
    let mut hw = HardwareAdapter::new(GateBankDriver::new());
    let mut sink = LogEventSink::new();

    // ── 5. Construct the controller ───────────────────────────
    let mut controller = Controller::new(&config, &clock);
    controller.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 6. Polling loop ───────────────────────────────────────
    let iterations_per_telemetry = u64::from(
        (config.telemetry_interval_secs * 1_000 / config.control_loop_interval_ms).max(1),
    );
    let mut iteration: u64 = 0;

    loop {
        controller.tick(&mut hw, &clock, &mut sink);

        iteration += 1;
        if iteration % iterations_per_telemetry == 0 {
            sink.emit(&AppEvent::Telemetry(controller.build_telemetry()));
        }

        // Feed watchdog on every iteration.
        watchdog.feed();

        // Pace the loop; everything above is non-blocking.
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(config.control_loop_interval_ms);
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.control_loop_interval_ms,
        )));
    }
}
