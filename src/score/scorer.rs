//! Multi-signal confidence scoring

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::signal::Signal;

use super::types::{ConfidenceScore, Tier};

/// Configuration for the confidence scorer
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerConfig {
    /// Minimum confidence for a full-position pick
    #[serde(default = "default_tier1_threshold")]
    pub tier1_threshold: Decimal,

    /// Minimum confidence for a partial-position pick
    #[serde(default = "default_tier2_threshold")]
    pub tier2_threshold: Decimal,

    /// Minimum confidence for a lean
    #[serde(default = "default_lean_threshold")]
    pub lean_threshold: Decimal,

    /// Detected signals required before flat-average scoring produces a pick
    #[serde(default = "default_min_signals")]
    pub min_signals: usize,
}

fn default_tier1_threshold() -> Decimal {
    dec!(0.85)
}
fn default_tier2_threshold() -> Decimal {
    dec!(0.75)
}
fn default_lean_threshold() -> Decimal {
    dec!(0.60)
}
fn default_min_signals() -> usize {
    2
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            tier1_threshold: dec!(0.85),
            tier2_threshold: dec!(0.75),
            lean_threshold: dec!(0.60),
            min_signals: 2,
        }
    }
}

impl ScorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit_range("scorer.tier1_threshold", self.tier1_threshold)?;
        ConfigError::check_unit_range("scorer.tier2_threshold", self.tier2_threshold)?;
        ConfigError::check_unit_range("scorer.lean_threshold", self.lean_threshold)?;
        if self.tier1_threshold < self.tier2_threshold || self.tier2_threshold < self.lean_threshold
        {
            return Err(ConfigError::Ordering {
                lesser: "scorer.lean_threshold",
                greater: "scorer.tier1_threshold",
            });
        }
        if self.min_signals == 0 {
            return Err(ConfigError::OutOfRange {
                name: "scorer.min_signals",
                value: Decimal::ZERO,
            });
        }
        Ok(())
    }
}

/// Combines detector signals into a tiered confidence score
pub struct ConfidenceScorer {
    config: ScorerConfig,
}

impl ConfidenceScorer {
    pub fn new(config: ScorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: ScorerConfig::default(),
        }
    }

    /// Flat scoring over an undifferentiated signal list
    ///
    /// Each detected signal is weighted by its own confidence, so strong
    /// signals pull the average toward themselves harder than a plain mean
    /// would. Fewer than `min_signals` detected signals is an automatic
    /// pass no matter how strong the survivors are.
    pub fn score(&self, signals: &[Signal]) -> ConfidenceScore {
        let detected: Vec<&Signal> = signals.iter().filter(|s| s.detected).collect();

        if detected.len() < self.config.min_signals {
            return ConfidenceScore::pass(detected.len());
        }

        let mut weighted_sum = Decimal::ZERO;
        let mut weight_total = Decimal::ZERO;
        for signal in &detected {
            weighted_sum += signal.confidence * signal.confidence;
            weight_total += signal.confidence;
        }

        let confidence = if weight_total.is_zero() {
            Decimal::ZERO
        } else {
            weighted_sum / weight_total
        };

        ConfidenceScore {
            confidence,
            tier: self.tier_for(confidence),
            signals: detected.iter().map(|s| s.kind).collect(),
            signal_count: detected.len(),
        }
    }

    /// Primary/confirmation scoring
    ///
    /// Primaries are the required trigger; confirmations only boost. The
    /// i-th detected confirmation contributes `confidence * 0.05 / (i + 1)`
    /// so repeat confirmations see harmonic diminishing returns, the total
    /// boost is capped at +0.10, and the final confidence at 0.95.
    pub fn score_with_boost(
        &self,
        primary_signals: &[Signal],
        confirmation_signals: &[Signal],
    ) -> ConfidenceScore {
        let primary: Vec<&Signal> = primary_signals.iter().filter(|s| s.detected).collect();
        let confirmation: Vec<&Signal> =
            confirmation_signals.iter().filter(|s| s.detected).collect();

        // Confirmation-only guardrail: no primary, no pick.
        if primary.is_empty() {
            return ConfidenceScore::pass(0);
        }

        let primary_sum: Decimal = primary.iter().map(|s| s.confidence).sum();
        let primary_confidence = primary_sum / Decimal::from(primary.len() as u64);

        let mut boost = Decimal::ZERO;
        for (i, signal) in confirmation.iter().enumerate() {
            boost += signal.confidence * (dec!(0.05) / Decimal::from(i as u64 + 1));
        }
        boost = boost.min(dec!(0.10));

        let confidence = (primary_confidence + boost).min(dec!(0.95));

        let signals: Vec<_> = primary
            .iter()
            .chain(confirmation.iter())
            .map(|s| s.kind)
            .collect();
        let signal_count = signals.len();

        ConfidenceScore {
            confidence,
            tier: self.tier_for(confidence),
            signals,
            signal_count,
        }
    }

    fn tier_for(&self, confidence: Decimal) -> Tier {
        if confidence >= self.config.tier1_threshold {
            Tier::Tier1
        } else if confidence >= self.config.tier2_threshold {
            Tier::Tier2
        } else if confidence >= self.config.lean_threshold {
            Tier::Lean
        } else {
            Tier::Pass
        }
    }
}
