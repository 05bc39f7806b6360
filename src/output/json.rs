// JSON report — the full ranking run as a machine-readable file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::pipeline::affinity::Affinity;
use crate::pipeline::PopularityReport;

/// What gets written to disk: the report, the settings that produced it,
/// and the affinity guesses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Utc>,
    pub min_users: u64,
    pub top_k: usize,
    pub fallback_cohort: u32,
    pub report: PopularityReport,
    pub affinities: Vec<Affinity>,
}

/// Write the report as pretty-printed JSON, creating parent directories.
/// Returns the path written.
pub fn write_report(report: &JsonReport, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(path = %path.display(), "Wrote JSON report");
    Ok(path.display().to_string())
}
