// RankedReporter — frequency filter, then per-cohort top-K by popularity.
//
// Tokens mentioned by fewer than `min_users` distinct users are dropped
// outright before any scoring. For each cohort the surviving tokens it
// mentions are scored and the K best are kept, ordered by (-score, token):
// highest score first, alphabetically smaller token on ties.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::counts::CohortTokenCounts;
use super::popularity::relative_popularity;
use crate::cohorts::{CohortAssigner, CohortId};

/// A token and its relative popularity within one cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: String,
    pub score: f64,
}

/// A token and the number of distinct users who mentioned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: u64,
}

/// Keep only tokens mentioned by at least `min_users` distinct users.
pub fn frequent_tokens(global: &HashMap<String, u64>, min_users: u64) -> HashMap<String, u64> {
    global
        .iter()
        .filter(|(_, n)| **n >= min_users)
        .map(|(t, n)| (t.clone(), *n))
        .collect()
}

/// Ranking order: higher score first, then ascending token.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.token.cmp(&b.token))
}

/// The `k` best entries in ranking order. Fewer than `k` entries are all kept.
pub fn top_k_by_popularity(mut entries: Vec<RankedEntry>, k: usize) -> Vec<RankedEntry> {
    if k == 0 {
        return Vec::new();
    }
    if entries.len() > k {
        entries.select_nth_unstable_by(k - 1, compare_entries);
        entries.truncate(k);
    }
    entries.sort_by(compare_entries);
    entries
}

/// Score every (cohort, token) pair whose token passed the frequency filter,
/// grouped by cohort. Cohorts with no surviving tokens are absent.
pub fn cohort_scores(
    cohort_counts: &CohortTokenCounts,
    frequent: &HashMap<String, u64>,
) -> BTreeMap<CohortId, Vec<RankedEntry>> {
    let mut scored: BTreeMap<CohortId, Vec<RankedEntry>> = BTreeMap::new();
    for ((cohort, token), &count) in cohort_counts {
        if let Some(&global) = frequent.get(token) {
            scored.entry(*cohort).or_default().push(RankedEntry {
                token: token.clone(),
                score: relative_popularity(count, global),
            });
        }
    }
    scored
}

/// Top-`k` ranked entries for every cohort, fallback included. A cohort
/// with nothing above the threshold maps to an empty list.
pub fn rank_cohorts(
    cohort_counts: &CohortTokenCounts,
    frequent: &HashMap<String, u64>,
    assigner: &CohortAssigner,
    k: usize,
) -> BTreeMap<CohortId, Vec<RankedEntry>> {
    let mut scored = cohort_scores(cohort_counts, frequent);

    let per_cohort: Vec<(CohortId, Vec<RankedEntry>)> = assigner
        .cohort_ids()
        .map(|id| (id, scored.remove(&id).unwrap_or_default()))
        .collect();

    per_cohort
        .into_par_iter()
        .map(|(id, entries)| (id, top_k_by_popularity(entries, k)))
        .collect()
}

/// Most-mentioned tokens overall, by count descending then token ascending.
pub fn top_tokens_by_count(frequent: &HashMap<String, u64>, n: usize) -> Vec<TokenCount> {
    let mut counts: Vec<TokenCount> = frequent
        .iter()
        .map(|(token, &count)| TokenCount {
            token: token.clone(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, score: f64) -> RankedEntry {
        RankedEntry {
            token: token.to_string(),
            score,
        }
    }

    #[test]
    fn test_filter_is_inclusive_at_threshold() {
        let global: HashMap<String, u64> =
            [("a".to_string(), 100), ("b".to_string(), 99), ("c".to_string(), 250)].into();
        let kept = frequent_tokens(&global, 100);
        assert_eq!(kept.len(), 2);
        assert!(kept.contains_key("a"));
        assert!(!kept.contains_key("b"));
    }

    #[test]
    fn test_top_k_tie_break_alphabetical() {
        let entries = vec![entry("zebra", -1.0), entry("apple", -1.0), entry("mango", -0.5)];
        let top = top_k_by_popularity(entries, 10);
        let tokens: Vec<&str> = top.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["mango", "apple", "zebra"]);
    }

    #[test]
    fn test_top_k_truncates() {
        let entries: Vec<RankedEntry> = (0..20)
            .map(|i| entry(&format!("t{i:02}"), -(i as f64)))
            .collect();
        let top = top_k_by_popularity(entries, 3);
        let tokens: Vec<&str> = top.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["t00", "t01", "t02"]);
    }

    #[test]
    fn test_top_k_zero_and_empty() {
        assert!(top_k_by_popularity(vec![entry("a", 0.0)], 0).is_empty());
        assert!(top_k_by_popularity(Vec::new(), 5).is_empty());
    }

    #[test]
    fn test_top_tokens_by_count_order() {
        let frequent: HashMap<String, u64> =
            [("b".to_string(), 5), ("a".to_string(), 5), ("c".to_string(), 9)].into();
        let top = top_tokens_by_count(&frequent, 2);
        assert_eq!(top[0].token, "c");
        assert_eq!(top[1].token, "a");
        assert_eq!(top.len(), 2);
    }
}
