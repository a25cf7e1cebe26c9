//! Merge raw market sources into unified game records
//!
//! Combines an odds snapshot, the day's opening lines, and public betting
//! splits into one `GameRecord` per game. Detectors never see the raw
//! sources; everything they consume is validated here.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::feed::{MarketKey, OddsGame, OddsSnapshot};
use crate::store::{GameSplits, OpeningLine};

use super::GameRecord;

/// Current consensus (spread, total) for a game, read from its first
/// bookmaker's listings
///
/// The spread is the home team's point; the total is the first totals
/// outcome's point. The same rule feeds opening-line capture, so openers
/// and current lines stay comparable.
pub fn consensus_lines(game: &OddsGame) -> (Option<Decimal>, Option<Decimal>) {
    let Some(book) = game.bookmakers.first() else {
        return (None, None);
    };

    let mut spread = None;
    let mut total = None;
    for market in &book.markets {
        match market.key {
            MarketKey::Spreads => {
                spread = market
                    .outcomes
                    .iter()
                    .find(|o| o.name.eq_ignore_ascii_case(&game.home_team))
                    .and_then(|o| o.point);
            }
            MarketKey::Totals => {
                total = market.outcomes.first().and_then(|o| o.point);
            }
            _ => {}
        }
    }
    (spread, total)
}

/// Merge the three sources into per-game records
pub fn merge_game_data(
    odds: &OddsSnapshot,
    opening_lines: &HashMap<String, OpeningLine>,
    public_splits: &HashMap<String, GameSplits>,
) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(odds.games.len());

    for game in &odds.games {
        let (current_spread, current_total) = consensus_lines(game);
        let opening = opening_lines.get(&game.id);
        let splits = public_splits.get(&game.id);

        games.push(GameRecord {
            game_id: game.id.clone(),
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            commence_time: game.commence_time,
            current_spread,
            current_total,
            opening_spread: opening.and_then(|o| o.spread),
            opening_total: opening.and_then(|o| o.total),
            public_pct_home: sanitize_pct(
                &game.id,
                "spread.home",
                splits.and_then(|s| s.spread.as_ref()).and_then(|s| s.home),
            ),
            public_pct_over: sanitize_pct(
                &game.id,
                "total.over",
                splits.and_then(|s| s.total.as_ref()).and_then(|s| s.over),
            ),
            public_pct_home_ml: sanitize_pct(
                &game.id,
                "ml.home",
                splits.and_then(|s| s.ml.as_ref()).and_then(|s| s.home),
            ),
            public_pct_home_spread: sanitize_pct(
                &game.id,
                "spread.home",
                splits.and_then(|s| s.spread.as_ref()).and_then(|s| s.home),
            ),
            home_ats_l10: splits
                .and_then(|s| s.ats.as_ref())
                .and_then(|a| a.home.clone()),
            away_ats_l10: splits
                .and_then(|s| s.ats.as_ref())
                .and_then(|a| a.away.clone()),
            bookmakers: game.bookmakers.clone(),
        });
    }

    tracing::info!(games = games.len(), "Merged game data");
    games
}

/// Drop a public share that is outside [0, 1]
///
/// Detectors assume unit-interval percentages; a bad split is treated as
/// missing instead of poisoning downstream arithmetic.
fn sanitize_pct(game_id: &str, field: &str, value: Option<Decimal>) -> Option<Decimal> {
    match value {
        Some(pct) if pct < Decimal::ZERO || pct > Decimal::ONE => {
            tracing::warn!(game_id, field, %pct, "Public split outside [0, 1], ignoring");
            None
        }
        other => other,
    }
}
