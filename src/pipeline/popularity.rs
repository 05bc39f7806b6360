// PopularityScorer — log2 share of a token's mentions that come from one cohort.
//
//   p(k, t) = log2( N(k, t) / N(all, t) )
//
// The score is 0 when every user who mentioned t is in cohort k and falls by
// one for each halving of the cohort's share. It is never positive.

use std::f64::consts::LN_2;

/// Relative popularity of a token within a cohort.
///
/// # Panics
///
/// If `global_count` is zero, `cohort_count` is zero, or `cohort_count`
/// exceeds `global_count`. Each of these means the frequency filter was
/// skipped or the counts were built from different inputs.
pub fn relative_popularity(cohort_count: u64, global_count: u64) -> f64 {
    assert!(
        global_count > 0,
        "relative popularity requested for a token with no global mentions"
    );
    assert!(
        cohort_count > 0 && cohort_count <= global_count,
        "cohort count {cohort_count} outside 1..={global_count}"
    );
    (cohort_count as f64 / global_count as f64).ln() / LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_token_scores_zero() {
        assert_eq!(relative_popularity(5, 5), 0.0);
    }

    #[test]
    fn test_halving_drops_one() {
        assert!((relative_popularity(1, 2) + 1.0).abs() < 1e-12);
        assert!((relative_popularity(1, 4) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_thirds() {
        assert!((relative_popularity(2, 3) - (-0.5849625007)).abs() < 1e-9);
        assert!((relative_popularity(1, 3) - (-1.5849625007)).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "no global mentions")]
    fn test_zero_global_panics() {
        relative_popularity(0, 0);
    }

    #[test]
    #[should_panic]
    fn test_cohort_above_global_panics() {
        relative_popularity(4, 3);
    }
}
