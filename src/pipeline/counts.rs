// CohortTokenCounter — distinct users per (cohort, token).
//
// Each user's token set is flattened into (cohort, token) pairs, one per
// token. Because the aggregation stage already deduplicated per user, a plain
// occurrence count of each pair is exactly the number of distinct users in
// that cohort who mentioned the token.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use super::aggregate::UserTokens;
use crate::cohorts::{CohortAssigner, CohortId};

/// Distinct-user mention counts keyed by (cohort, token).
pub type CohortTokenCounts = HashMap<(CohortId, String), u64>;

/// Merge two partial count maps by addition.
pub fn merge_counts<K>(mut a: HashMap<K, u64>, mut b: HashMap<K, u64>) -> HashMap<K, u64>
where
    K: std::hash::Hash + Eq,
{
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (key, n) in b {
        *a.entry(key).or_insert(0) += n;
    }
    a
}

/// Count, for every (cohort, token) that occurs, how many users mentioned it.
pub fn count_cohort_tokens(
    user_tokens: &UserTokens,
    assigner: &CohortAssigner,
) -> CohortTokenCounts {
    user_tokens
        .par_iter()
        .fold(CohortTokenCounts::new, |mut acc, (user, tokens)| {
            let cohort = assigner.assign(user);
            for token in tokens {
                *acc.entry((cohort, token.clone())).or_insert(0) += 1;
            }
            acc
        })
        .reduce(CohortTokenCounts::new, merge_counts)
}

/// Total mentions per token, summed over every cohort (fallback included).
pub fn global_counts(cohort_counts: &CohortTokenCounts) -> HashMap<String, u64> {
    cohort_counts
        .par_iter()
        .fold(HashMap::new, |mut acc: HashMap<String, u64>, ((_, token), n)| {
            *acc.entry(token.clone()).or_insert(0) += n;
            acc
        })
        .reduce(HashMap::new, merge_counts)
}

/// Number of distinct users observed per cohort. Every cohort count for a
/// token is bounded by its cohort's entry here.
pub fn users_per_cohort(
    user_tokens: &UserTokens,
    assigner: &CohortAssigner,
) -> BTreeMap<CohortId, u64> {
    let mut users: BTreeMap<CohortId, u64> = assigner.cohort_ids().map(|id| (id, 0)).collect();
    for user in user_tokens.keys() {
        *users.entry(assigner.assign(user)).or_insert(0) += 1;
    }
    users
}
