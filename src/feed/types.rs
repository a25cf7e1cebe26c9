//! Odds snapshot wire types
//!
//! Shapes mirror The Odds API response: games carry bookmakers, bookmakers
//! carry markets, markets carry priced outcomes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market identifier on a bookmaker listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKey {
    /// Moneyline
    H2h,
    Spreads,
    Totals,
    /// Any market this engine does not price
    #[serde(other)]
    Other,
}

/// One priced outcome inside a market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Team name for spreads/h2h, "Over"/"Under" for totals
    pub name: String,
    /// Line the price applies to; absent for moneyline outcomes
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub point: Option<Decimal>,
    /// Decimal odds
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

/// One market offered by one bookmaker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookMarket {
    pub key: MarketKey,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// One bookmaker's listings for a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub markets: Vec<BookMarket>,
}

/// One game as returned by the odds feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsGame {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

/// A captured odds window: every game's listings at one fetch time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsSnapshot {
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub games: Vec<OddsGame>,
}

impl OddsSnapshot {
    pub fn new(games: Vec<OddsGame>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            fetched_at: Some(fetched_at),
            games,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_key_lowercase() {
        let key: MarketKey = serde_json::from_str("\"spreads\"").unwrap();
        assert_eq!(key, MarketKey::Spreads);
        let key: MarketKey = serde_json::from_str("\"h2h\"").unwrap();
        assert_eq!(key, MarketKey::H2h);
    }

    #[test]
    fn test_unknown_market_key_tolerated() {
        let key: MarketKey = serde_json::from_str("\"player_points\"").unwrap();
        assert_eq!(key, MarketKey::Other);
    }

    #[test]
    fn test_odds_game_deserializes_api_shape() {
        let json = r#"{
            "id": "abc123",
            "home_team": "Brooklyn Nets",
            "away_team": "Chicago Bulls",
            "commence_time": "2026-02-09T23:10:00Z",
            "bookmakers": [
                {
                    "key": "draftkings",
                    "title": "DraftKings",
                    "markets": [
                        {
                            "key": "totals",
                            "outcomes": [
                                {"name": "Over", "point": 218.5, "price": 1.91},
                                {"name": "Under", "point": 218.5, "price": 1.91}
                            ]
                        }
                    ]
                }
            ]
        }"#;
        let game: OddsGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.bookmakers.len(), 1);
        let market = &game.bookmakers[0].markets[0];
        assert_eq!(market.key, MarketKey::Totals);
        assert_eq!(market.outcomes[0].point, Some(dec!(218.5)));
        assert_eq!(market.outcomes[0].price, Some(dec!(1.91)));
    }
}
