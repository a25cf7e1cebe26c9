//! Moneyline vs spread divergence detection
//!
//! Compares the public's moneyline share against its spread share on the
//! same team. A wide gap means the public expects one result straight-up
//! and another against the number, which leaves value on the opposite side
//! of the spread.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::config::ConfigError;
use crate::game::GameRecord;

use super::types::{fmt_pct, fmt_signed, Side, Signal, SignalKind};

/// Configuration for ML/spread divergence detection
#[derive(Debug, Clone, Deserialize)]
pub struct MlDivergenceConfig {
    /// Minimum gap between ML% and spread% to fire
    #[serde(default = "default_min_divergence")]
    pub min_divergence: Decimal,

    /// Gap at or beyond this switches to the strong confidence band
    #[serde(default = "default_strong_divergence")]
    pub strong_divergence: Decimal,
}

fn default_min_divergence() -> Decimal {
    dec!(0.15)
}
fn default_strong_divergence() -> Decimal {
    dec!(0.30)
}

impl Default for MlDivergenceConfig {
    fn default() -> Self {
        Self {
            min_divergence: dec!(0.15),
            strong_divergence: dec!(0.30),
        }
    }
}

impl MlDivergenceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit_range("divergence.min_divergence", self.min_divergence)?;
        ConfigError::check_unit_range("divergence.strong_divergence", self.strong_divergence)?;
        if self.strong_divergence < self.min_divergence {
            return Err(ConfigError::Ordering {
                lesser: "divergence.min_divergence",
                greater: "divergence.strong_divergence",
            });
        }
        Ok(())
    }
}

/// Detects divergence between moneyline and spread public percentages
pub struct MlDivergenceDetector {
    config: MlDivergenceConfig,
}

impl MlDivergenceDetector {
    pub fn new(config: MlDivergenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: MlDivergenceConfig::default(),
        }
    }

    /// Run detection against a single game
    pub fn detect(&self, game: &GameRecord) -> Signal {
        let (Some(ml_pct_home), Some(spread_pct_home)) =
            (game.public_pct_home_ml, game.public_pct_home_spread)
        else {
            return Signal::not_detected(
                SignalKind::MlDivergence,
                Decimal::ZERO,
                "Missing ML or spread public betting data",
            );
        };

        let divergence = (ml_pct_home - spread_pct_home).abs();

        if divergence < self.config.min_divergence {
            return Signal::not_detected(
                SignalKind::MlDivergence,
                divergence,
                format!("No ML/spread divergence. Gap: {}%", fmt_pct(divergence)),
            );
        }

        let current_spread = game.current_spread.unwrap_or(Decimal::ZERO);
        let confidence = self.confidence(divergence);

        if ml_pct_home > spread_pct_home {
            // Public thinks home wins outright but not by the number: the
            // away dog with the points is the sharp side.
            let reasoning = format!(
                "ML/spread divergence: {}% ({}% ML vs {}% spread on {home}). Public says '{home} wins but doesn't cover'. Sharp side: {away} {line}",
                fmt_pct(divergence),
                fmt_pct(ml_pct_home),
                fmt_pct(spread_pct_home),
                home = game.home_team,
                away = game.away_team,
                line = fmt_signed(-current_spread),
            );
            Signal::detected(SignalKind::MlDivergence, Side::Away, confidence, divergence, reasoning)
        } else {
            let reasoning = format!(
                "ML/spread divergence: {}% ({}% spread vs {}% ML on {home}). Public says '{home} covers but might not win'. Sharp side: {home} {line}",
                fmt_pct(divergence),
                fmt_pct(spread_pct_home),
                fmt_pct(ml_pct_home),
                home = game.home_team,
                line = fmt_signed(current_spread),
            );
            Signal::detected(SignalKind::MlDivergence, Side::Home, confidence, divergence, reasoning)
        }
    }

    fn confidence(&self, divergence: Decimal) -> Decimal {
        if divergence >= self.config.strong_divergence {
            (dec!(0.75) + (divergence - self.config.strong_divergence) * dec!(0.5)).min(dec!(0.85))
        } else {
            dec!(0.70) + (divergence - self.config.min_divergence) * dec!(0.3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameRecord;

    fn game(ml_home: Decimal, spread_home: Decimal) -> GameRecord {
        GameRecord {
            public_pct_home_ml: Some(ml_home),
            public_pct_home_spread: Some(spread_home),
            current_spread: Some(dec!(-10.5)),
            ..GameRecord::test_fixture("ORL", "MIL")
        }
    }

    #[test]
    fn test_wide_divergence_favors_away_dog() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&game(dec!(0.84), dec!(0.36)));
        assert!(signal.detected);
        assert_eq!(signal.sharp_side, Some(Side::Away));
        assert_eq!(signal.magnitude, dec!(0.48));
        // strong band: min(0.85, 0.75 + (0.48 - 0.30) * 0.5)
        assert_eq!(signal.confidence, dec!(0.84));
        assert!(signal.reasoning.contains("MIL +10.5"));
    }

    #[test]
    fn test_spread_heavier_than_ml_favors_home() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&game(dec!(0.40), dec!(0.62)));
        assert!(signal.detected);
        assert_eq!(signal.sharp_side, Some(Side::Home));
        assert_eq!(signal.magnitude, dec!(0.22));
        // weak band: 0.70 + (0.22 - 0.15) * 0.3
        assert_eq!(signal.confidence, dec!(0.721));
    }

    #[test]
    fn test_moderate_divergence() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&game(dec!(0.70), dec!(0.50)));
        assert!(signal.detected);
        assert_eq!(signal.magnitude, dec!(0.20));
    }

    #[test]
    fn test_small_gap_never_fires() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&game(dec!(0.60), dec!(0.55)));
        assert!(!signal.detected);
        assert_eq!(signal.magnitude, dec!(0.05));
    }

    #[test]
    fn test_boundary_gap_is_inclusive() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&game(dec!(0.65), dec!(0.50)));
        assert!(signal.detected);
        assert_eq!(signal.confidence, dec!(0.70));
    }

    #[test]
    fn test_strong_band_capped_at_085() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&game(dec!(0.95), dec!(0.05)));
        assert!(signal.detected);
        assert_eq!(signal.confidence, dec!(0.85));
    }

    #[test]
    fn test_missing_percentages() {
        let detector = MlDivergenceDetector::with_defaults();
        let signal = detector.detect(&GameRecord::test_fixture("ORL", "MIL"));
        assert!(!signal.detected);
        assert!(signal.reasoning.contains("Missing"));
    }
}
