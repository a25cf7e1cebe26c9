//! Confidence scoring types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::signal::SignalKind;

/// Discrete confidence bucket for sizing/display decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Full position
    #[serde(rename = "TIER_1")]
    Tier1,
    /// Partial position
    #[serde(rename = "TIER_2")]
    Tier2,
    /// Small position or watch
    #[serde(rename = "LEAN")]
    Lean,
    /// No bet
    #[serde(rename = "PASS")]
    Pass,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Tier1 => "TIER_1",
            Tier::Tier2 => "TIER_2",
            Tier::Lean => "LEAN",
            Tier::Pass => "PASS",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined confidence assessment for one market of one game
///
/// Recomputed on every scoring call; never held as mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceScore {
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    pub tier: Tier,
    /// Kinds of the contributing signals, primaries before confirmations
    pub signals: Vec<SignalKind>,
    pub signal_count: usize,
}

impl ConfidenceScore {
    /// The no-bet result: zero confidence, no contributors
    pub fn pass(signal_count: usize) -> Self {
        Self {
            confidence: Decimal::ZERO,
            tier: Tier::Pass,
            signals: Vec::new(),
            signal_count,
        }
    }

    /// True when this score clears the no-bet bar
    pub fn is_actionable(&self) -> bool {
        self.tier != Tier::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serde_names() {
        assert_eq!(serde_json::to_string(&Tier::Tier1).unwrap(), "\"TIER_1\"");
        assert_eq!(serde_json::to_string(&Tier::Lean).unwrap(), "\"LEAN\"");
        let tier: Tier = serde_json::from_str("\"TIER_2\"").unwrap();
        assert_eq!(tier, Tier::Tier2);
    }

    #[test]
    fn test_pass_score() {
        let score = ConfidenceScore::pass(1);
        assert_eq!(score.tier, Tier::Pass);
        assert_eq!(score.confidence, Decimal::ZERO);
        assert!(score.signals.is_empty());
        assert_eq!(score.signal_count, 1);
        assert!(!score.is_actionable());
    }
}
