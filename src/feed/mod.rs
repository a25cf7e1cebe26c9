//! Odds feed module
//!
//! Wire types for bookmaker listings and the HTTP client that fetches them.

mod odds_api;
mod types;

pub use odds_api::OddsApiClient;
pub use types::{BookMarket, Bookmaker, MarketKey, OddsGame, OddsSnapshot, Outcome};
