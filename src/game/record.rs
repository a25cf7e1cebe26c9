//! Unified per-game market record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::feed::Bookmaker;

/// One game's merged market data, consumed by every detector
///
/// Every market field is optional: a sparse record is valid input and simply
/// keeps the affected detectors from firing. Spread convention is
/// home-relative, negative when the home team is favored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub opening_spread: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_spread: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub opening_total: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub current_total: Option<Decimal>,
    /// Share of public spread bets on the home team
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub public_pct_home: Option<Decimal>,
    /// Share of public total bets on the over
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub public_pct_over: Option<Decimal>,
    /// Share of public moneyline bets on the home team
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub public_pct_home_ml: Option<Decimal>,
    /// Share of public spread bets on the home team, as reported alongside
    /// the moneyline split
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub public_pct_home_spread: Option<Decimal>,
    /// ATS record over the last ten games, e.g. "2-8"
    #[serde(default)]
    pub home_ats_l10: Option<String>,
    #[serde(default)]
    pub away_ats_l10: Option<String>,
    /// Full per-book price listings, kept for best-line lookup
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

impl GameRecord {
    /// Display label, away side first by sportsbook convention
    pub fn label(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    /// Minimal record for tests: teams set, every market field absent
    #[cfg(test)]
    pub(crate) fn test_fixture(home: &str, away: &str) -> Self {
        Self {
            game_id: format!("{}-{}", away.to_lowercase(), home.to_lowercase()),
            home_team: home.to_string(),
            away_team: away.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_label() {
        let record = GameRecord::test_fixture("BKN", "CHI");
        assert_eq!(record.label(), "CHI @ BKN");
    }

    #[test]
    fn test_sparse_record_deserializes() {
        let record: GameRecord = serde_json::from_str(
            r#"{"game_id": "g1", "home_team": "BKN", "away_team": "CHI"}"#,
        )
        .unwrap();
        assert!(record.opening_spread.is_none());
        assert!(record.bookmakers.is_empty());
    }

    #[test]
    fn test_numeric_fields_deserialize_from_json_numbers() {
        let record: GameRecord = serde_json::from_str(
            r#"{
                "game_id": "g1",
                "home_team": "BKN",
                "away_team": "CHI",
                "opening_total": 223.5,
                "current_total": 218.5,
                "public_pct_over": 0.64
            }"#,
        )
        .unwrap();
        assert_eq!(record.opening_total, Some(dec!(223.5)));
        assert_eq!(record.public_pct_over, Some(dec!(0.64)));
    }
}
