//! Telemetry module
//!
//! Logging for the CLI. The pricing library only emits `tracing` events and
//! never installs a subscriber itself.

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;
    tracing::debug!(
        level = %config.log_level,
        format = ?config.log_format,
        "Telemetry initialized"
    );
    Ok(())
}
