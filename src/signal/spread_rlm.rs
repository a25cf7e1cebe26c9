//! Spread reverse-line-movement detection
//!
//! Fires when the point spread moves against the side holding the majority
//! of public spread bets. A line drifting away from the public's team means
//! books are taking meaningful money on the other side.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::game::GameRecord;

use super::types::{fmt_pct, fmt_signed, Side, Signal, SignalKind};

/// Configuration for spread RLM detection
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadRlmConfig {
    /// Minimum public share on one side before a move against it counts
    #[serde(default = "default_min_public_threshold")]
    pub min_public_threshold: Decimal,

    /// Line movement in points that must be exceeded (strictly) to fire
    #[serde(default = "default_min_line_move")]
    pub min_line_move: Decimal,
}

fn default_min_public_threshold() -> Decimal {
    dec!(0.55)
}
fn default_min_line_move() -> Decimal {
    dec!(1.5)
}

impl Default for SpreadRlmConfig {
    fn default() -> Self {
        Self {
            min_public_threshold: dec!(0.55),
            min_line_move: dec!(1.5),
        }
    }
}

impl SpreadRlmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit_range("spread.min_public_threshold", self.min_public_threshold)?;
        ConfigError::check_non_negative("spread.min_line_move", self.min_line_move)?;
        Ok(())
    }
}

/// Detects reverse line movement on the spread market
pub struct SpreadRlmDetector {
    config: SpreadRlmConfig,
}

impl SpreadRlmDetector {
    /// Create a detector, validating thresholds up front
    pub fn new(config: SpreadRlmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a detector with default thresholds
    pub fn with_defaults() -> Self {
        Self {
            config: SpreadRlmConfig::default(),
        }
    }

    /// Run detection against a single game
    ///
    /// Spread convention: negative means home favored, so a positive
    /// movement shifts value toward the away team. Missing line data means
    /// the signal declines to fire rather than guessing.
    pub fn detect(&self, game: &GameRecord) -> Signal {
        let (Some(opening_spread), Some(current_spread)) =
            (game.opening_spread, game.current_spread)
        else {
            return Signal::not_detected(
                SignalKind::SpreadRlm,
                Decimal::ZERO,
                "Missing opening or current spread data",
            );
        };

        // A missing split reads as an even 50/50 book, which can never clear
        // the public threshold.
        let public_pct_home = game.public_pct_home.unwrap_or(dec!(0.5));
        let public_on_away = Decimal::ONE - public_pct_home;

        let line_movement = current_spread - opening_spread;
        let magnitude = line_movement.abs();

        let public_on_home_strong = public_pct_home >= self.config.min_public_threshold;
        let public_on_away_strong = public_on_away >= self.config.min_public_threshold;

        if public_on_home_strong && line_movement > self.config.min_line_move {
            // Public on home, line moved toward away: sharp money on away.
            let confidence = self.confidence(magnitude);
            let reasoning = format!(
                "Line moved {} pts against {} despite {}% public on {}. Sharp money on {}.",
                fmt_signed(line_movement),
                game.home_team,
                fmt_pct(public_pct_home),
                game.home_team,
                game.away_team,
            );
            Signal::detected(SignalKind::SpreadRlm, Side::Away, confidence, magnitude, reasoning)
        } else if public_on_away_strong && line_movement < -self.config.min_line_move {
            let confidence = self.confidence(magnitude);
            let reasoning = format!(
                "Line moved {} pts against {} despite {}% public on {}. Sharp money on {}.",
                fmt_signed(line_movement),
                game.away_team,
                fmt_pct(public_on_away),
                game.away_team,
                game.home_team,
            );
            Signal::detected(SignalKind::SpreadRlm, Side::Home, confidence, magnitude, reasoning)
        } else {
            let reasoning = format!(
                "No spread RLM. Line movement: {}, public: {}% {}",
                fmt_signed(line_movement),
                fmt_pct(public_pct_home),
                game.home_team,
            );
            Signal::not_detected(SignalKind::SpreadRlm, magnitude, reasoning)
        }
    }

    /// Confidence rises linearly with movement past the threshold, capped at 0.90
    fn confidence(&self, magnitude: Decimal) -> Decimal {
        (dec!(0.75) + (magnitude - self.config.min_line_move) * dec!(0.05)).min(dec!(0.90))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameRecord;

    fn game(opening: Decimal, current: Decimal, public_home: Decimal) -> GameRecord {
        GameRecord {
            opening_spread: Some(opening),
            current_spread: Some(current),
            public_pct_home: Some(public_home),
            ..GameRecord::test_fixture("LAL", "OKC")
        }
    }

    #[test]
    fn test_line_moving_with_public_is_not_rlm() {
        // Home got MORE favored while the public sat on home: no reverse move.
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-4.0), dec!(-6.5), dec!(0.57)));
        assert!(!signal.detected);
    }

    #[test]
    fn test_line_moving_against_public_home_side() {
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-6.5), dec!(-4.0), dec!(0.57)));
        assert!(signal.detected);
        assert_eq!(signal.sharp_side, Some(Side::Away));
        assert_eq!(signal.magnitude, dec!(2.5));
        // 0.75 + (2.5 - 1.5) * 0.05
        assert_eq!(signal.confidence, dec!(0.80));
        assert!(signal.reasoning.contains("Sharp money on OKC"));
    }

    #[test]
    fn test_line_moving_against_public_away_side() {
        // 62% on away, home line tightened by 2 points: sharp money on home.
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-4.0), dec!(-6.0), dec!(0.38)));
        assert!(signal.detected);
        assert_eq!(signal.sharp_side, Some(Side::Home));
        assert_eq!(signal.confidence, dec!(0.775));
    }

    #[test]
    fn test_balanced_public_never_fires() {
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-4.0), dec!(-6.5), dec!(0.50)));
        assert!(!signal.detected);
    }

    #[test]
    fn test_small_movement_never_fires() {
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-4.0), dec!(-4.5), dec!(0.60)));
        assert!(!signal.detected);
    }

    #[test]
    fn test_boundary_movement_is_exclusive() {
        // public exactly at threshold (inclusive) but movement exactly at
        // threshold (strict) must not fire.
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-5.5), dec!(-4.0), dec!(0.55)));
        assert_eq!(signal.magnitude, dec!(1.5));
        assert!(!signal.detected);
    }

    #[test]
    fn test_confidence_capped_at_090() {
        let detector = SpreadRlmDetector::with_defaults();
        let signal = detector.detect(&game(dec!(-12.0), dec!(-2.0), dec!(0.60)));
        assert!(signal.detected);
        assert_eq!(signal.confidence, dec!(0.90));
    }

    #[test]
    fn test_missing_spread_data() {
        let detector = SpreadRlmDetector::with_defaults();
        let mut record = GameRecord::test_fixture("LAL", "OKC");
        record.public_pct_home = Some(dec!(0.60));
        let signal = detector.detect(&record);
        assert!(!signal.detected);
        assert_eq!(signal.confidence, Decimal::ZERO);
        assert!(signal.reasoning.contains("Missing"));
    }

    #[test]
    fn test_missing_public_split_reads_as_even() {
        let detector = SpreadRlmDetector::with_defaults();
        let mut record = game(dec!(-6.5), dec!(-4.0), dec!(0.5));
        record.public_pct_home = None;
        assert!(!detector.detect(&record).detected);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = SpreadRlmConfig {
            min_public_threshold: dec!(1.5),
            ..Default::default()
        };
        assert!(SpreadRlmDetector::new(config).is_err());
    }
}
