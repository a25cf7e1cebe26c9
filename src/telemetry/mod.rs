//! Telemetry module
//!
//! Metrics and logging

mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use self::metrics::{increment, CounterMetric};

use crate::config::TelemetryConfig;

/// Initialize the logging subsystem
///
/// The metrics exporter is started separately by long-running commands;
/// one-shot commands have nothing worth scraping.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level)
}
