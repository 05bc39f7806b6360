// CohortAssigner — user id to cohort id lookup.
//
// The mapping is produced elsewhere (a clustering job over follower graphs)
// and loaded once per run. It deliberately doesn't cover every author in the
// corpus: anyone missing from it lands in the fallback cohort, whose id is
// one past the last real cohort.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Cohort identifier. Real cohorts are `0..cohort_count`; the fallback is
/// `cohort_count` itself.
pub type CohortId = u32;

/// Read-only user → cohort mapping for one run.
#[derive(Debug, Clone)]
pub struct CohortAssigner {
    mapping: HashMap<String, CohortId>,
    cohort_count: u32,
}

impl CohortAssigner {
    /// Build an assigner from an in-memory mapping.
    ///
    /// Fails if any user is mapped to an id outside `0..cohort_count`, since
    /// that would collide with (or skip past) the fallback cohort.
    pub fn new(mapping: HashMap<String, CohortId>, cohort_count: u32) -> Result<Self> {
        if cohort_count == 0 {
            anyhow::bail!("cohort count must be at least 1");
        }
        if let Some((user, id)) = mapping.iter().find(|(_, id)| **id >= cohort_count) {
            anyhow::bail!(
                "user {user} is mapped to cohort {id}, but only cohorts 0..{} exist \
                 (cohort {cohort_count} is reserved for unassigned users)",
                cohort_count - 1
            );
        }
        Ok(Self {
            mapping,
            cohort_count,
        })
    }

    /// Load a JSON object of `{"user_id": cohort_id}` pairs.
    pub fn load(path: impl AsRef<Path>, cohort_count: u32) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cohort mapping {}", path.display()))?;
        let mapping: HashMap<String, CohortId> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "Cohort mapping {} is not a JSON object of user ids to cohort ids",
                path.display()
            )
        })?;

        let assigner = Self::new(mapping, cohort_count)?;
        info!(
            users = assigner.mapped_users(),
            cohorts = assigner.cohort_count(),
            path = %path.display(),
            "Loaded cohort mapping"
        );
        Ok(assigner)
    }

    /// Cohort for a user; unmapped users get the fallback cohort.
    pub fn assign(&self, user_id: &str) -> CohortId {
        self.mapping
            .get(user_id)
            .copied()
            .unwrap_or(self.cohort_count)
    }

    /// The reserved id for users absent from the mapping.
    pub fn fallback(&self) -> CohortId {
        self.cohort_count
    }

    /// Number of real (non-fallback) cohorts.
    pub fn cohort_count(&self) -> u32 {
        self.cohort_count
    }

    /// Every cohort id including the fallback, ascending.
    pub fn cohort_ids(&self) -> impl Iterator<Item = CohortId> {
        0..=self.cohort_count
    }

    /// Number of users with an explicit assignment.
    pub fn mapped_users(&self) -> usize {
        self.mapping.len()
    }
}
