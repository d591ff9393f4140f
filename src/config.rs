//! System configuration parameters
//!
//! All tunable timing parameters for the DustGate controller.  There is no
//! persistent storage on this board; the configuration is built from
//! defaults at boot and validated before the control loop starts.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Actuation timing ---
    /// Seconds the collector motor keeps running after the last gate
    /// switch releases.
    pub linger_secs: u16,
    /// Minimum seconds between two consecutive actuator transitions.
    pub stagger_cadence_secs: u16,

    // --- Loop timing ---
    /// Polling loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Actuation
            linger_secs: 10,
            stagger_cadence_secs: 1,

            // Loop
            control_loop_interval_ms: 10,   // 100 Hz poll
            telemetry_interval_secs: 60,    // 1/min
        }
    }
}

/// A configuration field failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigError(pub &'static str);

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid config: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl SystemConfig {
    /// Reject values that would stall or thrash the actuators.  Invalid
    /// ranges are rejected, not silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stagger_cadence_secs == 0 {
            return Err(ConfigError("stagger_cadence_secs must be >= 1"));
        }
        if self.linger_secs < self.stagger_cadence_secs {
            return Err(ConfigError("linger_secs must cover at least one cadence"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError("control_loop_interval_ms must be >= 1"));
        }
        if self.telemetry_interval_secs == 0 {
            return Err(ConfigError("telemetry_interval_secs must be >= 1"));
        }
        Ok(())
    }
}
