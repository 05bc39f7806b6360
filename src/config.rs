use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Knobs for the ranking pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Tokens mentioned by fewer distinct users than this are dropped
    pub min_users: u64,
    /// Number of real cohorts; id `cohort_count` is the fallback
    pub cohort_count: u32,
    /// Entries kept per cohort
    pub top_k: usize,
    /// Entries in the overall most-mentioned list
    pub overall_top: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_users: 100,
            cohort_count: 7,
            top_k: 10,
            overall_top: 20,
        }
    }
}

impl RankingConfig {
    /// Reject settings that would make every report empty or meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.cohort_count == 0 {
            anyhow::bail!("COHORTRANK_COHORTS must be at least 1");
        }
        if self.top_k == 0 {
            anyhow::bail!("COHORTRANK_TOP_K must be at least 1");
        }
        Ok(())
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub ranking: RankingConfig,
    /// JSON file mapping user ids to cohort ids
    pub partition_path: Option<PathBuf>,
    /// Optional JSON file of entities for affinity inference
    pub entities_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults; set-but-unparseable ones are
    /// errors rather than silently ignored.
    pub fn load() -> Result<Self> {
        let defaults = RankingConfig::default();

        let ranking = RankingConfig {
            min_users: env_or("COHORTRANK_MIN_USERS", defaults.min_users)?,
            cohort_count: env_or("COHORTRANK_COHORTS", defaults.cohort_count)?,
            top_k: env_or("COHORTRANK_TOP_K", defaults.top_k)?,
            overall_top: env_or("COHORTRANK_OVERALL_TOP", defaults.overall_top)?,
        };

        Ok(Self {
            ranking,
            partition_path: env::var("COHORTRANK_PARTITION").ok().map(PathBuf::from),
            entities_path: env::var("COHORTRANK_ENTITIES").ok().map(PathBuf::from),
        })
    }

    /// Check that a cohort mapping is configured.
    /// Call this before any operation that needs cohort assignment.
    pub fn require_partition(&self) -> Result<&PathBuf> {
        match &self.partition_path {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No cohort mapping given. Pass --partition or set COHORTRANK_PARTITION \
                 in your .env file."
            ),
        }
    }
}

/// Parse an environment variable, falling back to `default` when unset.
fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name}={raw:?} is not a valid value")),
        Err(_) => Ok(default),
    }
}
