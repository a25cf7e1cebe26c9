//! Per-run pick deduplication

use std::collections::HashSet;

use crate::signal::SignalKind;

use super::types::Pick;

/// Market a pick belongs to, for dedup keying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickMarket {
    Spread,
    Total,
}

impl PickMarket {
    /// Classify a pick by its signals: total RLM only ever backs total
    /// picks, everything else is a spread pick.
    pub fn of(pick: &Pick) -> Self {
        if pick.signals.contains(&SignalKind::TotalRlm) {
            PickMarket::Total
        } else {
            PickMarket::Spread
        }
    }
}

/// Run-scoped set of already-emitted picks
///
/// Owned by whichever loop drives repeated evaluations; nothing here is
/// global, so independent runs never see each other's state and tests stay
/// hermetic. Keyed by (game id, market): a game's spread pick does not
/// suppress its total pick.
#[derive(Debug, Default)]
pub struct SeenPicks {
    seen: HashSet<(String, PickMarket)>,
}

impl SeenPicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pick; returns true the first time this (game, market) is seen
    pub fn insert(&mut self, game_id: &str, market: PickMarket) -> bool {
        self.seen.insert((game_id.to_string(), market))
    }

    pub fn contains(&self, game_id: &str, market: PickMarket) -> bool {
        self.seen.contains(&(game_id.to_string(), market))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
