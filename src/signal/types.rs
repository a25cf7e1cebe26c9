//! Signal types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which detector produced a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Spread moved against the public side
    SpreadRlm,
    /// Total moved against the public side
    TotalRlm,
    /// Moneyline and spread public percentages disagree
    MlDivergence,
    /// Extreme ATS streak worth fading
    AtsExtreme,
}

impl SignalKind {
    /// Wire label used in pick output
    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::SpreadRlm => "spread_rlm",
            SignalKind::TotalRlm => "total_rlm",
            SignalKind::MlDivergence => "ml_divergence",
            SignalKind::AtsExtreme => "ats_extreme",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a market the sharp money is presumed to be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
    Over,
    Under,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
            Side::Over => "over",
            Side::Under => "under",
        }
    }

    /// True for the team sides of a spread market
    pub fn is_team(self) -> bool {
        matches!(self, Side::Home | Side::Away)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one detector run on one game
///
/// A non-detected signal is not an error: it carries confidence 0.0, no
/// sharp side, and a reasoning string describing why nothing fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub detected: bool,
    pub kind: SignalKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    #[serde(default)]
    pub sharp_side: Option<Side>,
    #[serde(with = "rust_decimal::serde::float")]
    pub magnitude: Decimal,
    pub reasoning: String,
}

impl Signal {
    /// Create a detected signal
    pub fn detected(
        kind: SignalKind,
        sharp_side: Side,
        confidence: Decimal,
        magnitude: Decimal,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            detected: true,
            kind,
            confidence,
            sharp_side: Some(sharp_side),
            magnitude,
            reasoning: reasoning.into(),
        }
    }

    /// Create a non-detected signal with an explanatory reasoning string
    pub fn not_detected(kind: SignalKind, magnitude: Decimal, reasoning: impl Into<String>) -> Self {
        Self {
            detected: false,
            kind,
            confidence: Decimal::ZERO,
            sharp_side: None,
            magnitude,
            reasoning: reasoning.into(),
        }
    }
}

/// Render a line with an explicit sign and one decimal place, e.g. "+2.5"
pub(crate) fn fmt_signed(value: Decimal) -> String {
    if value.is_sign_negative() {
        format!("{value:.1}")
    } else {
        format!("+{value:.1}")
    }
}

/// Render a unit-interval share as a whole percentage, e.g. "57"
pub(crate) fn fmt_pct(share: Decimal) -> String {
    format!("{:.0}", share * Decimal::ONE_HUNDRED)
}
