//! Total (over/under) reverse-line-movement detection

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::game::GameRecord;

use super::types::{fmt_pct, Side, Signal, SignalKind};

/// Configuration for total RLM detection
#[derive(Debug, Clone, Deserialize)]
pub struct TotalRlmConfig {
    /// Minimum total movement in points to consider
    #[serde(default = "default_min_total_move")]
    pub min_total_move: Decimal,

    /// Movement at or beyond this switches to the strong confidence band
    #[serde(default = "default_strong_total_move")]
    pub strong_total_move: Decimal,

    /// Minimum public share on the faded side
    #[serde(default = "default_min_public_threshold")]
    pub min_public_threshold: Decimal,
}

fn default_min_total_move() -> Decimal {
    dec!(2.0)
}
fn default_strong_total_move() -> Decimal {
    dec!(4.0)
}
fn default_min_public_threshold() -> Decimal {
    dec!(0.60)
}

impl Default for TotalRlmConfig {
    fn default() -> Self {
        Self {
            min_total_move: dec!(2.0),
            strong_total_move: dec!(4.0),
            min_public_threshold: dec!(0.60),
        }
    }
}

impl TotalRlmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit_range("total.min_public_threshold", self.min_public_threshold)?;
        ConfigError::check_non_negative("total.min_total_move", self.min_total_move)?;
        ConfigError::check_non_negative("total.strong_total_move", self.strong_total_move)?;
        if self.strong_total_move < self.min_total_move {
            return Err(ConfigError::Ordering {
                lesser: "total.min_total_move",
                greater: "total.strong_total_move",
            });
        }
        Ok(())
    }
}

/// Detects reverse line movement on the totals market
///
/// A total dropping several points while the public hammers the over is the
/// classic sharp-under footprint, and the symmetric case reads as sharp
/// money on the over.
pub struct TotalRlmDetector {
    config: TotalRlmConfig,
}

impl TotalRlmDetector {
    pub fn new(config: TotalRlmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: TotalRlmConfig::default(),
        }
    }

    /// Run detection against a single game
    pub fn detect(&self, game: &GameRecord) -> Signal {
        let (Some(opening_total), Some(current_total)) = (game.opening_total, game.current_total)
        else {
            return Signal::not_detected(
                SignalKind::TotalRlm,
                Decimal::ZERO,
                "Missing opening or current total data",
            );
        };

        let public_pct_over = game.public_pct_over.unwrap_or(dec!(0.5));
        let public_pct_under = Decimal::ONE - public_pct_over;

        let total_movement = current_total - opening_total;
        let magnitude = total_movement.abs();

        if total_movement <= -self.config.min_total_move
            && public_pct_over >= self.config.min_public_threshold
        {
            let reasoning = format!(
                "Total dropped {magnitude:.1} pts ({opening_total} -> {current_total}) against {}% public on Over. Sharp money on UNDER.",
                fmt_pct(public_pct_over),
            );
            Signal::detected(
                SignalKind::TotalRlm,
                Side::Under,
                self.confidence(magnitude),
                magnitude,
                reasoning,
            )
        } else if total_movement >= self.config.min_total_move
            && public_pct_under >= self.config.min_public_threshold
        {
            let reasoning = format!(
                "Total rose {magnitude:.1} pts ({opening_total} -> {current_total}) against {}% public on Under. Sharp money on OVER.",
                fmt_pct(public_pct_under),
            );
            Signal::detected(
                SignalKind::TotalRlm,
                Side::Over,
                self.confidence(magnitude),
                magnitude,
                reasoning,
            )
        } else {
            let sign = if total_movement.is_sign_negative() { "" } else { "+" };
            let reasoning = format!(
                "No total RLM. Total movement: {sign}{total_movement:.1}, public: {}% Over",
                fmt_pct(public_pct_over),
            );
            Signal::not_detected(SignalKind::TotalRlm, magnitude, reasoning)
        }
    }

    /// Two-band confidence: 0.70-0.80 below the strong threshold, 0.80-0.90
    /// at or above it
    fn confidence(&self, magnitude: Decimal) -> Decimal {
        if magnitude >= self.config.strong_total_move {
            (dec!(0.80) + (magnitude - self.config.strong_total_move) * dec!(0.02)).min(dec!(0.90))
        } else {
            dec!(0.70) + (magnitude - self.config.min_total_move) * dec!(0.05)
        }
    }
}
