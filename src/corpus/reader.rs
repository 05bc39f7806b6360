// Input file handling.
//
// A run reads one or more newline-delimited JSON files. Large runs list their
// shards in a manifest file (one path per line) instead of on the command
// line. Lines are parsed as they stream in; only accepted documents are kept
// in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::parse::{parse_post, Document};

/// Tallies from reading a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Raw lines read across all files
    pub lines: u64,
    /// Lines that parsed into a usable document
    pub accepted: u64,
    /// Broken JSON, control messages, and records without user/text
    pub skipped: u64,
}

/// Documents plus how many lines were kept and dropped.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub stats: LoadStats,
}

/// Read a manifest listing input paths, one per line.
///
/// Blank lines are ignored. Relative paths are returned as written (relative
/// to the working directory, not the manifest).
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;

    let paths: Vec<PathBuf> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect();

    debug!(count = paths.len(), manifest = %path.display(), "Read input manifest");
    Ok(paths)
}

/// Parse every line of a reader into documents, updating `stats`.
pub fn parse_lines<R: BufRead>(
    reader: R,
    documents: &mut Vec<Document>,
    stats: &mut LoadStats,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        stats.lines += 1;
        match parse_post(&line) {
            Some(doc) => {
                stats.accepted += 1;
                documents.push(doc);
            }
            None => stats.skipped += 1,
        }
    }
    Ok(())
}

/// Load and parse all input files in order.
pub fn load_documents(paths: &[PathBuf]) -> Result<Corpus> {
    if paths.is_empty() {
        anyhow::bail!("No input files given. Pass files directly or use --manifest.");
    }

    let mut corpus = Corpus::default();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} Reading {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    for path in paths {
        spinner.set_message(path.display().to_string());
        let file = File::open(path)
            .with_context(|| format!("Failed to open input {}", path.display()))?;
        parse_lines(BufReader::new(file), &mut corpus.documents, &mut corpus.stats)
            .with_context(|| format!("Failed while reading {}", path.display()))?;
        spinner.tick();
    }
    spinner.finish_and_clear();

    info!(
        files = paths.len(),
        lines = corpus.stats.lines,
        accepted = corpus.stats.accepted,
        skipped = corpus.stats.skipped,
        "Loaded corpus"
    );

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_lines_tallies() {
        let input = concat!(
            r#"{"text":"hello","user":{"id_str":"1"}}"#, "\n",
            "not json\n",
            r#"{"limit":{"track":3}}"#, "\n",
            r#"{"text":"again","user":{"id_str":"2"}}"#, "\n",
        );
        let mut docs = Vec::new();
        let mut stats = LoadStats::default();
        parse_lines(Cursor::new(input), &mut docs, &mut stats).unwrap();

        assert_eq!(stats.lines, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.skipped, 2);
        assert_eq!(docs[1], Document::new("2", "again"));
    }

    #[test]
    fn test_load_documents_requires_inputs() {
        assert!(load_documents(&[]).is_err());
    }

    #[test]
    fn test_load_documents_missing_file() {
        let missing = PathBuf::from("/nonexistent/cohortrank/input.jsonl");
        assert!(load_documents(&[missing]).is_err());
    }
}
