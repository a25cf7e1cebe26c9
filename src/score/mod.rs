//! Confidence scoring module
//!
//! Combines detector signals into a single tiered recommendation score.

mod scorer;
mod types;

pub use scorer::{ConfidenceScorer, ScorerConfig};
pub use types::{ConfidenceScore, Tier};
