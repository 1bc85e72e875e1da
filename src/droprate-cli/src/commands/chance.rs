//! Completion chance calculator

use anyhow::{bail, Result};
use droprate::stats;

/// Print the chance of seeing every outcome within `tries` draws
pub fn handle(probabilities: &[f64], tries: u32) -> Result<()> {
    if probabilities.len() > stats::MAX_OUTCOMES {
        bail!("At most {} outcomes are supported", stats::MAX_OUTCOMES);
    }
    if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
        bail!("Probabilities must be between 0 and 1");
    }
    if probabilities.iter().sum::<f64>() > 1.0 + 1e-9 {
        bail!("Probabilities of exclusive outcomes cannot sum above 1");
    }

    println!("{}", describe(probabilities, tries));
    Ok(())
}

fn describe(probabilities: &[f64], tries: u32) -> String {
    match probabilities {
        [p] => format!(
            "Chance of at least one hit within {} draws: {:.4}%",
            tries,
            stats::any_within(*p, tries).unwrap_or(0.0) * 100.0
        ),
        _ => format!(
            "Chance of all {} outcomes within {} draws: {:.4}%",
            probabilities.len(),
            tries,
            stats::all_within(probabilities, tries).unwrap_or(0.0) * 100.0
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_probabilities() {
        assert!(handle(&[0.5, 1.5], 4).is_err());
        assert!(handle(&[0.7, 0.7], 4).is_err());
    }

    #[test]
    fn test_too_few_tries_is_zero() {
        assert!(handle(&[0.3, 0.3, 0.3], 2).is_ok());
        assert!(describe(&[0.3, 0.3, 0.3], 2).ends_with("0.0000%"));
    }

    #[test]
    fn test_single_outcome() {
        // 1 - 0.5^2
        assert_eq!(
            describe(&[0.5], 2),
            "Chance of at least one hit within 2 draws: 75.0000%"
        );
    }

    #[test]
    fn test_huge_try_count() {
        assert!(describe(&[0.5], u32::MAX).ends_with("100.0000%"));
        assert!(describe(&[0.5, 0.5], 3_000_000_000).ends_with("100.0000%"));
    }
}
