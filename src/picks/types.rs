//! Pick output types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::score::Tier;
use crate::signal::SignalKind;

/// A betting recommendation for one market of one game
///
/// Immutable once created; this exact shape is what every consumer
/// (console, webhook, JSON file) receives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pick {
    pub game_id: String,
    /// Display label, e.g. "CHI @ BKN"
    pub game: String,
    /// The recommended bet, e.g. "UNDER 218.5" or "MIL +10.5"
    pub pick: String,
    pub tier: Tier,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    /// Labels of the signals behind the pick, primaries first
    pub signals: Vec<SignalKind>,
    pub reasoning: String,
    /// Where to place it, e.g. "FanDuel UNDER 218.5 -105"
    pub best_book: String,
    pub timestamp: DateTime<Utc>,
}
