// Token popularity ranking pipeline.
//
// Stages run strictly in order, each producing a fresh map from the previous
// one:
//
//   documents -> per-user token sets -> (cohort, token) user counts
//             -> global counts -> frequency filter -> per-cohort top-K
//
// Nothing is cached between runs; the same inputs always give the same report.

pub mod affinity;
pub mod aggregate;
pub mod counts;
pub mod popularity;
pub mod ranking;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cohorts::{CohortAssigner, CohortId};
use crate::config::RankingConfig;
use crate::corpus::Document;
use crate::tokenize::traits::Tokenizer;
use ranking::{RankedEntry, TokenCount};

/// Everything one ranking run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityReport {
    /// Distinct authors seen
    pub users: usize,
    /// Distinct tokens before the frequency filter
    pub distinct_tokens: usize,
    /// Distinct tokens mentioned by at least `min_users` users
    pub frequent_tokens: usize,
    /// Most-mentioned frequent tokens overall
    pub overall: Vec<TokenCount>,
    /// Top-K tokens by relative popularity, for every cohort id
    pub cohorts: BTreeMap<CohortId, Vec<RankedEntry>>,
}

/// Run the full pipeline over a batch of documents.
pub fn run<T>(
    documents: &[Document],
    tokenizer: &T,
    assigner: &CohortAssigner,
    config: &RankingConfig,
) -> PopularityReport
where
    T: Tokenizer + ?Sized,
{
    let user_tokens = aggregate::aggregate_user_tokens(documents, tokenizer);
    info!(
        documents = documents.len(),
        users = user_tokens.len(),
        "Aggregated per-user token sets"
    );

    let cohort_counts = counts::count_cohort_tokens(&user_tokens, assigner);
    let global = counts::global_counts(&cohort_counts);
    info!(
        pairs = cohort_counts.len(),
        distinct_tokens = global.len(),
        "Counted distinct-user mentions"
    );

    let frequent = ranking::frequent_tokens(&global, config.min_users);
    info!(
        min_users = config.min_users,
        kept = frequent.len(),
        dropped = global.len() - frequent.len(),
        "Applied frequency filter"
    );

    let cohorts = ranking::rank_cohorts(&cohort_counts, &frequent, assigner, config.top_k);
    let overall = ranking::top_tokens_by_count(&frequent, config.overall_top);

    PopularityReport {
        users: user_tokens.len(),
        distinct_tokens: global.len(),
        frequent_tokens: frequent.len(),
        overall,
        cohorts,
    }
}
