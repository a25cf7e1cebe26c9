//! Pick generation
//!
//! Orchestrates the detectors, the confidence scorer, sharp-side
//! resolution, and best-line lookup into final recommendations. Each game
//! yields at most one spread pick and one total pick.

use chrono::{DateTime, Utc};

use crate::config::{ConfigError, DetectorsConfig};
use crate::feed::MarketKey;
use crate::game::GameRecord;
use crate::score::{ConfidenceScorer, ScorerConfig};
use crate::signal::{
    fmt_signed, AtsTrendAnalyzer, MlDivergenceDetector, Side, Signal, SpreadRlmDetector,
    TotalRlmDetector,
};

use super::best_line::find_best_line;
use super::resolver::resolve_sharp_side;
use super::types::Pick;

/// Full detection-to-recommendation pipeline for a slate of games
pub struct PickEngine {
    spread_rlm: SpreadRlmDetector,
    total_rlm: TotalRlmDetector,
    ml_divergence: MlDivergenceDetector,
    ats_trend: AtsTrendAnalyzer,
    scorer: ConfidenceScorer,
}

impl PickEngine {
    /// Build an engine from validated configuration
    pub fn new(detectors: DetectorsConfig, scorer: ScorerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            spread_rlm: SpreadRlmDetector::new(detectors.spread)?,
            total_rlm: TotalRlmDetector::new(detectors.total)?,
            ml_divergence: MlDivergenceDetector::new(detectors.divergence)?,
            ats_trend: AtsTrendAnalyzer::new(detectors.ats)?,
            scorer: ConfidenceScorer::new(scorer)?,
        })
    }

    /// Engine with every threshold at its default
    pub fn with_defaults() -> Self {
        Self {
            spread_rlm: SpreadRlmDetector::with_defaults(),
            total_rlm: TotalRlmDetector::with_defaults(),
            ml_divergence: MlDivergenceDetector::with_defaults(),
            ats_trend: AtsTrendAnalyzer::with_defaults(),
            scorer: ConfidenceScorer::with_defaults(),
        }
    }

    /// Generate picks for a slate, stamped with the current time
    pub fn generate(&self, games: &[GameRecord]) -> Vec<Pick> {
        self.generate_at(games, Utc::now())
    }

    /// Generate picks with an explicit timestamp (for tests and replays)
    ///
    /// A game that cannot be scored simply contributes no picks; one bad
    /// record never aborts the slate.
    pub fn generate_at(&self, games: &[GameRecord], at: DateTime<Utc>) -> Vec<Pick> {
        let mut picks = Vec::new();
        for game in games {
            picks.extend(self.analyze_game_at(game, at));
        }
        // Strongest first; the stable sort keeps input order between equals.
        picks.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        tracing::info!(games = games.len(), picks = picks.len(), "Generated picks");
        picks
    }

    /// Analyze one game: 0, 1, or 2 picks (spread and/or total)
    pub fn analyze_game_at(&self, game: &GameRecord, at: DateTime<Utc>) -> Vec<Pick> {
        let spread_signal = self.spread_rlm.detect(game);
        let total_signal = self.total_rlm.detect(game);
        let ml_signal = self.ml_divergence.detect(game);
        let ats_signal = self.ats_trend.analyze(game);

        let mut picks = Vec::new();
        if let Some(pick) = self.spread_pick(game, &spread_signal, &ml_signal, &ats_signal, at) {
            picks.push(pick);
        }
        if let Some(pick) = self.total_pick(game, &total_signal, &ats_signal, at) {
            picks.push(pick);
        }
        picks
    }

    /// Spread market: spread RLM and ML divergence are primaries, ATS is
    /// confirmation, and the resolver arbitrates when the primaries
    /// disagree on a side.
    fn spread_pick(
        &self,
        game: &GameRecord,
        spread_signal: &Signal,
        ml_signal: &Signal,
        ats_signal: &Signal,
        at: DateTime<Utc>,
    ) -> Option<Pick> {
        let primaries: Vec<Signal> = [spread_signal, ml_signal]
            .into_iter()
            .filter(|s| s.detected)
            .cloned()
            .collect();
        if primaries.is_empty() {
            return None;
        }

        let score = self
            .scorer
            .score_with_boost(&primaries, std::slice::from_ref(ats_signal));
        if !score.is_actionable() {
            tracing::debug!(game_id = %game.game_id, "Spread signals below pick threshold");
            return None;
        }

        let voter_refs: Vec<&Signal> = primaries.iter().collect();
        let side = resolve_sharp_side(&voter_refs)?;
        let best = find_best_line(game, MarketKey::Spreads, side)?;

        let team = match side {
            Side::Home => &game.home_team,
            _ => &game.away_team,
        };
        let pick_label = format!("{team} {}", fmt_signed(best.point));
        let best_book = format!(
            "{} {team} {} {:+}",
            best.bookmaker,
            fmt_signed(best.point),
            best.american
        );

        let mut reasoning_parts: Vec<&str> =
            primaries.iter().map(|s| s.reasoning.as_str()).collect();
        if ats_signal.detected {
            reasoning_parts.push(ats_signal.reasoning.as_str());
        }

        tracing::info!(
            game_id = %game.game_id,
            tier = %score.tier,
            pick = %pick_label,
            confidence = %score.confidence,
            "Spread pick"
        );

        Some(Pick {
            game_id: game.game_id.clone(),
            game: game.label(),
            pick: pick_label,
            tier: score.tier,
            confidence: score.confidence,
            signals: score.signals,
            reasoning: reasoning_parts.join(" | "),
            best_book,
            timestamp: at,
        })
    }

    /// Total market: total RLM is the sole primary and its own side is
    /// authoritative, so no vote is needed.
    fn total_pick(
        &self,
        game: &GameRecord,
        total_signal: &Signal,
        ats_signal: &Signal,
        at: DateTime<Utc>,
    ) -> Option<Pick> {
        if !total_signal.detected {
            return None;
        }

        let score = self.scorer.score_with_boost(
            std::slice::from_ref(total_signal),
            std::slice::from_ref(ats_signal),
        );
        if !score.is_actionable() {
            tracing::debug!(game_id = %game.game_id, "Total signal below pick threshold");
            return None;
        }

        let side = total_signal.sharp_side?;
        let best = find_best_line(game, MarketKey::Totals, side)?;

        let pick_label = format!("{} {}", side.as_str().to_uppercase(), best.point);
        let best_book = format!("{} {pick_label} {:+}", best.bookmaker, best.american);

        let mut reasoning_parts = vec![total_signal.reasoning.as_str()];
        if ats_signal.detected {
            reasoning_parts.push(ats_signal.reasoning.as_str());
        }

        tracing::info!(
            game_id = %game.game_id,
            tier = %score.tier,
            pick = %pick_label,
            confidence = %score.confidence,
            "Total pick"
        );

        Some(Pick {
            game_id: game.game_id.clone(),
            game: game.label(),
            pick: pick_label,
            tier: score.tier,
            confidence: score.confidence,
            signals: score.signals,
            reasoning: reasoning_parts.join(" | "),
            best_book,
            timestamp: at,
        })
    }
}
