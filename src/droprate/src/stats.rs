//! Completion odds for a set of mutually exclusive outcomes
//!
//! Each draw yields at most one of N outcomes, outcome `i` with probability
//! `p_i`. The chance of having seen every outcome at least once after `t`
//! draws follows from inclusion-exclusion over the outcomes still missing:
//!
//! `P = Σ_{S ⊆ N} (-1)^|S| (1 - Σ_{i ∈ S} p_i)^t`

/// Upper bound on outcomes; the sum has 2^N terms
pub const MAX_OUTCOMES: usize = 20;

/// Chance that every outcome shows up at least once within `tries` draws
///
/// Returns `None` when there are fewer tries than outcomes (the chance is
/// zero by construction), when there are more than [`MAX_OUTCOMES`]
/// outcomes, or when the probabilities are invalid or sum above one.
pub fn all_within(probabilities: &[f64], tries: u32) -> Option<f64> {
    let n = probabilities.len();
    if n == 0 || n > MAX_OUTCOMES || (tries as usize) < n {
        return None;
    }
    if !probabilities.iter().all(|&p| crate::is_probability(p)) {
        return None;
    }
    if probabilities.iter().sum::<f64>() > 1.0 + 1e-9 {
        return None;
    }

    let total: f64 = (0u32..1 << n)
        .map(|subset| {
            let missing: f64 = probabilities
                .iter()
                .enumerate()
                .filter(|(i, _)| subset & (1 << i) != 0)
                .map(|(_, p)| p)
                .sum();
            let term = (1.0 - missing).max(0.0).powf(f64::from(tries));
            if subset.count_ones() % 2 == 0 {
                term
            } else {
                -term
            }
        })
        .sum();

    Some(total.clamp(0.0, 1.0))
}

/// Chance of at least one success in `tries` independent draws
pub fn any_within(probability: f64, tries: u32) -> Option<f64> {
    if !crate::is_probability(probability) {
        return None;
    }
    Some(1.0 - (1.0 - probability).powf(f64::from(tries)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_outcome_matches_any_within() {
        for tries in 1..10 {
            let all = all_within(&[0.2], tries).unwrap();
            let any = any_within(0.2, tries).unwrap();
            assert!((all - any).abs() < EPS);
        }
    }

    #[test]
    fn test_two_outcomes_two_tries() {
        // Either order: 2 * p * q
        let p = all_within(&[0.3, 0.5], 2).unwrap();
        assert!((p - 2.0 * 0.3 * 0.5).abs() < EPS);
    }

    #[test]
    fn test_three_outcomes_three_tries() {
        let probs = [0.3872, 0.3872, 0.2256];
        let p = all_within(&probs, 3).unwrap();
        let expected = 6.0 * probs.iter().product::<f64>();
        assert!((p - expected).abs() < EPS);
    }

    #[test]
    fn test_certain_outcomes() {
        // Two outcomes covering every draw: only all-same sequences fail
        let p = all_within(&[0.5, 0.5], 4).unwrap();
        assert!((p - (1.0 - 2.0 * 0.5_f64.powi(4))).abs() < EPS);
    }

    #[test]
    fn test_huge_try_counts() {
        let tries = 3_000_000_000;
        assert_eq!(any_within(0.5, tries), Some(1.0));
        assert!(all_within(&[0.5], tries).unwrap() > 0.99);
        assert!(all_within(&[0.3, 0.3, 0.4], u32::MAX).unwrap() > 0.99);
        assert_eq!(any_within(0.0, u32::MAX), Some(0.0));
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(all_within(&[], 4).is_none());
        assert!(all_within(&[0.5, 0.5], 1).is_none());
        assert!(all_within(&[0.5, 1.5], 4).is_none());
        assert!(all_within(&[0.7, 0.7], 4).is_none());
        assert!(all_within(&[0.01; MAX_OUTCOMES + 1], 40).is_none());
        assert!(any_within(-0.5, 3).is_none());
    }

    #[test]
    fn test_zero_probability_outcome_never_completes() {
        let p = all_within(&[0.5, 0.0], 10).unwrap();
        assert!(p.abs() < EPS);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn all_within_in_range_and_monotonic(
                probs in prop::collection::vec(0.0f64..0.2, 1..=5),
                tries in 5u32..200
            ) {
                let now = all_within(&probs, tries).unwrap();
                let later = all_within(&probs, tries + 1).unwrap();
                prop_assert!((0.0..=1.0).contains(&now));
                prop_assert!(later >= now - EPS);
            }

            #[test]
            fn all_within_bounded_by_rarest_outcome(
                probs in prop::collection::vec(0.0f64..0.2, 1..=5),
                tries in 5u32..200
            ) {
                let all = all_within(&probs, tries).unwrap();
                let rarest = probs.iter().copied().fold(1.0, f64::min);
                prop_assert!(all <= any_within(rarest, tries).unwrap() + EPS);
            }
        }
    }
}
