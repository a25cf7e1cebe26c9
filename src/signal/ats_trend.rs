//! ATS trend extreme analysis
//!
//! Looks for one-sided against-the-spread streaks over the last ten games
//! and fades them: bet on a team in an extreme cold run, bet against a team
//! in an extreme hot run. Strictly a confirmation input; the scorer never
//! lets this trigger a pick on its own.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::game::GameRecord;

use super::types::{Side, Signal, SignalKind};

/// Configuration for ATS extreme analysis
#[derive(Debug, Clone, Deserialize)]
pub struct AtsTrendConfig {
    /// Cover rate at or beyond which a streak counts as extreme
    #[serde(default = "default_extreme_threshold")]
    pub extreme_threshold: Decimal,
}

fn default_extreme_threshold() -> Decimal {
    dec!(0.70)
}

impl Default for AtsTrendConfig {
    fn default() -> Self {
        Self {
            extreme_threshold: dec!(0.70),
        }
    }
}

impl AtsTrendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit_range("ats.extreme_threshold", self.extreme_threshold)
    }
}

/// Analyzes ATS records for extreme streaks
pub struct AtsTrendAnalyzer {
    config: AtsTrendConfig,
}

impl AtsTrendAnalyzer {
    pub fn new(config: AtsTrendConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: AtsTrendConfig::default(),
        }
    }

    /// Analyze a single game's ATS records
    pub fn analyze(&self, game: &GameRecord) -> Signal {
        let home_ats = game.home_ats_l10.as_deref().unwrap_or("");
        let away_ats = game.away_ats_l10.as_deref().unwrap_or("");

        let (Some(home_rate), Some(away_rate)) =
            (parse_ats_record(home_ats), parse_ats_record(away_ats))
        else {
            return Signal::not_detected(
                SignalKind::AtsExtreme,
                Decimal::ZERO,
                "Missing or invalid ATS data",
            );
        };

        let cold_bound = Decimal::ONE - self.config.extreme_threshold;
        let home_cold = home_rate <= cold_bound;
        let away_cold = away_rate <= cold_bound;
        let home_hot = home_rate >= self.config.extreme_threshold;
        let away_hot = away_rate >= self.config.extreme_threshold;

        let half = dec!(0.5);
        let magnitude = (home_rate - half).abs().max((away_rate - half).abs()) * dec!(2);

        if home_cold && !away_cold {
            Signal::detected(
                SignalKind::AtsExtreme,
                Side::Home,
                dec!(0.70),
                magnitude,
                format!(
                    "{} is {home_ats} ATS L10 (extreme cold streak). Fade the streak: bet {}.",
                    game.home_team, game.home_team,
                ),
            )
        } else if away_cold && !home_cold {
            Signal::detected(
                SignalKind::AtsExtreme,
                Side::Away,
                dec!(0.70),
                magnitude,
                format!(
                    "{} is {away_ats} ATS L10 (extreme cold streak). Fade the streak: bet {}.",
                    game.away_team, game.away_team,
                ),
            )
        } else if home_hot && !away_hot {
            // Fading hot streaks has historically been the weaker play, so
            // it earns a lower confidence than fading cold ones.
            Signal::detected(
                SignalKind::AtsExtreme,
                Side::Away,
                dec!(0.65),
                magnitude,
                format!(
                    "{} is {home_ats} ATS L10 (extreme hot streak). Fade the streak: bet {}.",
                    game.home_team, game.away_team,
                ),
            )
        } else if away_hot && !home_hot {
            Signal::detected(
                SignalKind::AtsExtreme,
                Side::Home,
                dec!(0.65),
                magnitude,
                format!(
                    "{} is {away_ats} ATS L10 (extreme hot streak). Fade the streak: bet {}.",
                    game.away_team, game.home_team,
                ),
            )
        } else {
            Signal::not_detected(
                SignalKind::AtsExtreme,
                magnitude,
                format!(
                    "No extreme ATS trends. {}: {home_ats}, {}: {away_ats}",
                    game.home_team, game.away_team,
                ),
            )
        }
    }
}

/// Parse an ATS record like "2-8" into a cover rate
///
/// Returns None for empty, malformed, or zero-game records.
fn parse_ats_record(record: &str) -> Option<Decimal> {
    let (wins, losses) = record.split_once('-')?;
    let wins: u32 = wins.trim().parse().ok()?;
    let losses: u32 = losses.trim().parse().ok()?;
    let total = wins + losses;
    if total == 0 {
        return None;
    }
    Some(Decimal::from(wins) / Decimal::from(total))
}
