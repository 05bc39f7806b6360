// Cohort affinity inference — which cohort is most associated with a named figure.
//
// Best-effort reporting on top of the ranked lists. An entity (e.g. a
// candidate) is described by a few keywords; any ranked token that contains
// one of them as a substring counts as a hit ("sanders" also hits
// "#berniesanders", and "ted" also hits "united"). The cohort holding the
// highest-scoring hit wins. The fallback cohort is never a candidate, and two
// entities may well land on the same cohort.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ranking::RankedEntry;
use crate::cohorts::CohortId;

/// A named external figure and the keywords that identify it in tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Substrings matched against (already lower-cased) tokens
    pub keywords: Vec<String>,
}

impl Entity {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Whether a token mentions this entity.
    pub fn matches(&self, token: &str) -> bool {
        self.keywords.iter().any(|k| token.contains(k.as_str()))
    }
}

/// The strongest hit for an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityMatch {
    pub cohort: CohortId,
    pub token: String,
    pub score: f64,
}

/// Inference result for one entity; `best` is `None` when no ranked token
/// in any real cohort mentions it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affinity {
    pub entity: String,
    pub best: Option<AffinityMatch>,
}

/// The three 2016 primary candidates the cohort partition was built around.
pub fn default_entities() -> Vec<Entity> {
    vec![
        Entity::new("Bernie Sanders", &["bernie", "sanders"]),
        Entity::new("Ted Cruz", &["ted", "cruz"]),
        Entity::new("Donald Trump", &["donald", "trump"]),
    ]
}

/// Load entities from a JSON array of `{"name": ..., "keywords": [...]}`.
pub fn load_entities(path: impl AsRef<Path>) -> Result<Vec<Entity>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file {}", path.display()))?;
    let entities: Vec<Entity> = serde_json::from_str(&raw).with_context(|| {
        format!("Entity file {} is not a JSON array of entities", path.display())
    })?;
    if entities.is_empty() {
        anyhow::bail!("Entity file {} lists no entities", path.display());
    }
    Ok(entities)
}

/// Best-scoring hit for one entity across all non-fallback cohorts.
///
/// Cohorts are visited in ascending id order and entries in ranked order;
/// only a strictly higher score replaces the current best, so the earliest
/// hit wins ties.
pub fn best_match(
    entity: &Entity,
    ranked: &BTreeMap<CohortId, Vec<RankedEntry>>,
    fallback: CohortId,
) -> Option<AffinityMatch> {
    ranked
        .iter()
        .filter(|(cohort, _)| **cohort != fallback)
        .flat_map(|(cohort, entries)| entries.iter().map(move |e| (*cohort, e)))
        .filter(|(_, entry)| entity.matches(&entry.token))
        .fold(None, |best: Option<AffinityMatch>, (cohort, entry)| match best {
            Some(current) if current.score >= entry.score => Some(current),
            _ => Some(AffinityMatch {
                cohort,
                token: entry.token.clone(),
                score: entry.score,
            }),
        })
}

/// Infer the best cohort for each entity, in the order given.
pub fn infer_affinities(
    entities: &[Entity],
    ranked: &BTreeMap<CohortId, Vec<RankedEntry>>,
    fallback: CohortId,
) -> Vec<Affinity> {
    entities
        .iter()
        .map(|entity| Affinity {
            entity: entity.name.clone(),
            best: best_match(entity, ranked, fallback),
        })
        .collect()
}
