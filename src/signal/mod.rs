//! Signal detection module
//!
//! Four independent, stateless detectors that each examine one slice of a
//! game's market data and emit a typed signal with a confidence score.

mod ats_trend;
mod ml_divergence;
mod spread_rlm;
mod total_rlm;
mod types;

pub use ats_trend::{AtsTrendAnalyzer, AtsTrendConfig};
pub use ml_divergence::{MlDivergenceConfig, MlDivergenceDetector};
pub use spread_rlm::{SpreadRlmConfig, SpreadRlmDetector};
pub use total_rlm::{TotalRlmConfig, TotalRlmDetector};
pub use types::{Side, Signal, SignalKind};

pub(crate) use types::{fmt_pct, fmt_signed};
