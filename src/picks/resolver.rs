//! Sharp-side resolution across disagreeing signals

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::signal::{Side, Signal};

/// Resolve the consensus sharp side from a set of primary signals
///
/// Each detected signal votes for its side, weighted by its own confidence.
/// The strictly highest vote total wins. An exact tie falls back to the
/// side of the single strongest signal, and equal-strength signals resolve
/// to the first one in input order, so the outcome is stable across runs.
pub fn resolve_sharp_side(signals: &[&Signal]) -> Option<Side> {
    let voters: Vec<&Signal> = signals
        .iter()
        .copied()
        .filter(|s| s.detected && s.sharp_side.is_some())
        .collect();
    if voters.is_empty() {
        return None;
    }

    let mut votes: BTreeMap<Side, Decimal> = BTreeMap::new();
    for signal in &voters {
        let Some(side) = signal.sharp_side else { continue };
        *votes.entry(side).or_insert(Decimal::ZERO) += signal.confidence;
    }

    let top_votes = votes.values().copied().max()?;
    let mut leaders = votes
        .iter()
        .filter(|(_, total)| **total == top_votes)
        .map(|(side, _)| *side);
    let leader = leaders.next()?;
    if leaders.next().is_none() {
        return Some(leader);
    }

    // Tie: strongest individual signal decides, first in input order wins
    // equal confidences.
    let mut strongest: Option<&Signal> = None;
    for signal in &voters {
        if strongest.map_or(true, |best| signal.confidence > best.confidence) {
            strongest = Some(signal);
        }
    }
    strongest.and_then(|s| s.sharp_side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalKind;
    use rust_decimal_macros::dec;

    fn signal(side: Side, confidence: Decimal) -> Signal {
        Signal::detected(SignalKind::SpreadRlm, side, confidence, dec!(2.0), "vote")
    }

    #[test]
    fn test_single_signal_wins() {
        let a = signal(Side::Away, dec!(0.80));
        assert_eq!(resolve_sharp_side(&[&a]), Some(Side::Away));
    }

    #[test]
    fn test_higher_weighted_vote_wins() {
        let a = signal(Side::Away, dec!(0.80));
        let b = signal(Side::Home, dec!(0.70));
        assert_eq!(resolve_sharp_side(&[&a, &b]), Some(Side::Away));
    }

    #[test]
    fn test_two_agreeing_outvote_one_stronger() {
        let a = signal(Side::Home, dec!(0.60));
        let b = signal(Side::Home, dec!(0.60));
        let c = signal(Side::Away, dec!(0.90));
        assert_eq!(resolve_sharp_side(&[&a, &b, &c]), Some(Side::Home));
    }

    #[test]
    fn test_exact_tie_goes_to_strongest_signal() {
        let a = signal(Side::Home, dec!(0.70));
        let b = signal(Side::Away, dec!(0.75));
        let c = signal(Side::Home, dec!(0.05));
        // votes: home 0.75, away 0.75; b is the single strongest signal
        assert_eq!(resolve_sharp_side(&[&a, &b, &c]), Some(Side::Away));
    }

    #[test]
    fn test_full_tie_goes_to_first_in_order() {
        let a = signal(Side::Away, dec!(0.80));
        let b = signal(Side::Home, dec!(0.80));
        assert_eq!(resolve_sharp_side(&[&a, &b]), Some(Side::Away));
        assert_eq!(resolve_sharp_side(&[&b, &a]), Some(Side::Home));
    }

    #[test]
    fn test_non_detected_signals_do_not_vote() {
        let a = Signal::not_detected(SignalKind::SpreadRlm, Decimal::ZERO, "quiet");
        let b = signal(Side::Home, dec!(0.10));
        assert_eq!(resolve_sharp_side(&[&a, &b]), Some(Side::Home));
    }

    #[test]
    fn test_no_voters_resolves_to_none() {
        let a = Signal::not_detected(SignalKind::SpreadRlm, Decimal::ZERO, "quiet");
        assert_eq!(resolve_sharp_side(&[&a]), None);
        assert_eq!(resolve_sharp_side(&[]), None);
    }
}
