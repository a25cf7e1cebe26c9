//! Best available line across bookmakers

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::feed::MarketKey;
use crate::game::GameRecord;
use crate::signal::Side;

/// The best-priced listing found for a bet
#[derive(Debug, Clone, PartialEq)]
pub struct BestLine {
    pub bookmaker: String,
    pub point: Decimal,
    /// Decimal odds
    pub price: Decimal,
    /// Same price in American odds
    pub american: i64,
}

/// Find the best price for one side of one market across all bookmakers
///
/// Scans listings in input order and keeps the strictly highest decimal
/// price, so equal prices resolve to the first book encountered. Listings
/// with no point or with a price at or below 1.0 (no American equivalent)
/// are skipped as malformed.
pub fn find_best_line(game: &GameRecord, market: MarketKey, side: Side) -> Option<BestLine> {
    let mut best: Option<BestLine> = None;

    for bookmaker in &game.bookmakers {
        for book_market in &bookmaker.markets {
            if book_market.key != market {
                continue;
            }
            for outcome in &book_market.outcomes {
                if !outcome_matches(game, market, side, &outcome.name) {
                    continue;
                }
                let (Some(point), Some(price)) = (outcome.point, outcome.price) else {
                    continue;
                };
                if price <= Decimal::ONE {
                    continue;
                }
                if best.as_ref().map_or(true, |b| price > b.price) {
                    best = Some(BestLine {
                        bookmaker: bookmaker.title.clone(),
                        point,
                        price,
                        american: decimal_to_american(price),
                    });
                }
            }
        }
    }

    best
}

fn outcome_matches(game: &GameRecord, market: MarketKey, side: Side, name: &str) -> bool {
    match (market, side) {
        (MarketKey::Spreads, Side::Home) => name.eq_ignore_ascii_case(&game.home_team),
        (MarketKey::Spreads, Side::Away) => name.eq_ignore_ascii_case(&game.away_team),
        (MarketKey::Totals, Side::Over) => name.eq_ignore_ascii_case("over"),
        (MarketKey::Totals, Side::Under) => name.eq_ignore_ascii_case("under"),
        _ => false,
    }
}

/// Convert decimal odds to American odds, truncating toward zero
///
/// Callers must ensure `price > 1.0`.
pub fn decimal_to_american(price: Decimal) -> i64 {
    let american = if price >= dec!(2.0) {
        (price - Decimal::ONE) * Decimal::ONE_HUNDRED
    } else {
        dec!(-100) / (price - Decimal::ONE)
    };
    american.trunc().to_i64().unwrap_or(0)
}
