// Corpus-level counts reported before the token ranking.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;

use super::parse::Document;
use crate::cohorts::{CohortAssigner, CohortId};

/// Number of distinct authors in the corpus.
pub fn count_unique_users(documents: &[Document]) -> usize {
    documents
        .iter()
        .map(|d| d.user_id.as_str())
        .collect::<HashSet<&str>>()
        .len()
}

/// Posts (not users) per cohort, with every cohort present even if empty.
pub fn count_posts_by_cohort(
    documents: &[Document],
    assigner: &CohortAssigner,
) -> BTreeMap<CohortId, u64> {
    let counted = documents
        .par_iter()
        .fold(BTreeMap::new, |mut acc: BTreeMap<CohortId, u64>, doc| {
            *acc.entry(assigner.assign(&doc.user_id)).or_insert(0) += 1;
            acc
        })
        .reduce(BTreeMap::new, |mut a, b| {
            for (id, n) in b {
                *a.entry(id).or_insert(0) += n;
            }
            a
        });

    // Cohorts nobody posted from still get a row
    assigner
        .cohort_ids()
        .map(|id| (id, counted.get(&id).copied().unwrap_or(0)))
        .collect()
}
