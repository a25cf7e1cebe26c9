//! Configuration types for sharpline

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::score::ScorerConfig;
use crate::signal::{AtsTrendConfig, MlDivergenceConfig, SpreadRlmConfig, TotalRlmConfig};

/// Invalid configuration, rejected at construction time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} out of range: {value}")]
    OutOfRange { name: &'static str, value: Decimal },
    #[error("{lesser} must not exceed {greater}")]
    Ordering {
        lesser: &'static str,
        greater: &'static str,
    },
}

impl ConfigError {
    /// Require a value inside [0, 1]
    pub(crate) fn check_unit_range(name: &'static str, value: Decimal) -> Result<(), ConfigError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ConfigError::OutOfRange { name, value });
        }
        Ok(())
    }

    /// Require a value of at least zero
    pub(crate) fn check_non_negative(name: &'static str, value: Decimal) -> Result<(), ConfigError> {
        if value < Decimal::ZERO {
            return Err(ConfigError::OutOfRange { name, value });
        }
        Ok(())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub odds_api: OddsApiConfig,
    #[serde(default)]
    pub detectors: DetectorsConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Thresholds for all four detectors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectorsConfig {
    #[serde(default)]
    pub spread: SpreadRlmConfig,
    #[serde(default)]
    pub total: TotalRlmConfig,
    #[serde(default)]
    pub divergence: MlDivergenceConfig,
    #[serde(default)]
    pub ats: AtsTrendConfig,
}

impl DetectorsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spread.validate()?;
        self.total.validate()?;
        self.divergence.validate()?;
        self.ats.validate()?;
        Ok(())
    }
}

/// Snapshot directory configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Odds feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    #[serde(default = "default_odds_base_url")]
    pub base_url: String,
    /// API key; empty disables fetching
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_sport")]
    pub sport: String,
    #[serde(default = "default_regions")]
    pub regions: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_odds_base_url() -> String {
    "https://api.the-odds-api.com/v4".to_string()
}
fn default_sport() -> String {
    "basketball_nba".to_string()
}
fn default_regions() -> String {
    "us".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_odds_base_url(),
            api_key: String::new(),
            sport: default_sport(),
            regions: default_regions(),
            timeout_secs: 10,
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifyConfig {
    /// Discord webhook URL; absent disables notifications
    #[serde(default)]
    pub discord_webhook: Option<String>,
}

/// Watch loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Seconds between evaluation cycles
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    900
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval_secs: 900 }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_metrics_port() -> u16 {
    9090
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: 9090,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.detectors.validate()?;
        config.scorer.validate()?;
        Ok(config)
    }
}
