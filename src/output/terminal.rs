// Terminal output for corpus stats, rankings, and affinity guesses.
//
// Rankings keep the plain `token<TAB>score` layout so the output can be
// diffed or piped into other tools; only headers are colored.

use std::collections::BTreeMap;

use colored::Colorize;

use super::cohort_label;
use crate::cohorts::CohortId;
use crate::pipeline::affinity::Affinity;
use crate::pipeline::ranking::{RankedEntry, TokenCount};
use crate::pipeline::PopularityReport;

/// Header line used for every ranked block.
pub fn block_header(title: &str) -> String {
    format!("===== {title} =====")
}

/// Body lines for a cohort ranking, scores to 4 decimal places.
pub fn format_ranked_lines(entries: &[RankedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("{}\t{:.4}", e.token, e.score))
        .collect()
}

/// Body lines for the overall most-mentioned list.
pub fn format_count_lines(counts: &[TokenCount]) -> Vec<String> {
    counts
        .iter()
        .map(|c| format!("{}\t{}", c.token, c.count))
        .collect()
}

/// One sentence per entity with a match; entities without one say so.
pub fn format_affinity_line(affinity: &Affinity) -> String {
    match &affinity.best {
        Some(m) => format!(
            "Users from group {} are most likely to support {}.",
            m.cohort, affinity.entity
        ),
        None => format!(
            "No cohort's top tokens mention {}; no guess made.",
            affinity.entity
        ),
    }
}

pub fn display_unique_users(count: usize) {
    println!("The number of unique users is: {}", count.to_string().bold());
}

/// Posts per cohort, ascending by cohort id.
pub fn display_post_counts(counts: &BTreeMap<CohortId, u64>) {
    for (cohort, count) in counts {
        println!("Group {cohort} posted {count} tweets");
    }
}

pub fn display_overall(report: &PopularityReport) {
    println!(
        "Distinct tokens: {}  (mentioned by enough users: {})",
        report.distinct_tokens, report.frequent_tokens
    );
    println!("{}", block_header("overall").bold());
    for line in format_count_lines(&report.overall) {
        println!("{line}");
    }
    println!();
}

/// Every cohort's ranked list, fallback last.
pub fn display_cohort_rankings(report: &PopularityReport, fallback: CohortId) {
    for (cohort, entries) in &report.cohorts {
        let header = block_header(&cohort_label(*cohort, fallback));
        if *cohort == fallback {
            println!("{}", header.dimmed());
        } else {
            println!("{}", header.bold());
        }
        if entries.is_empty() {
            println!("{}", "(no tokens above the threshold)".dimmed());
        }
        for line in format_ranked_lines(entries) {
            println!("{line}");
        }
        println!();
    }
}

pub fn display_affinities(affinities: &[Affinity]) {
    for affinity in affinities {
        let line = format_affinity_line(affinity);
        if affinity.best.is_some() {
            println!("{line}");
        } else {
            println!("{}", line.yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::affinity::AffinityMatch;

    #[test]
    fn test_scores_four_decimals() {
        let lines = format_ranked_lines(&[RankedEntry {
            token: "i".to_string(),
            score: (2.0f64 / 3.0).log2(),
        }]);
        assert_eq!(lines, vec!["i\t-0.5850"]);
    }

    #[test]
    fn test_header() {
        assert_eq!(block_header("group 3"), "===== group 3 =====");
    }

    #[test]
    fn test_affinity_lines() {
        let found = Affinity {
            entity: "Ted Cruz".to_string(),
            best: Some(AffinityMatch {
                cohort: 5,
                token: "cruz".to_string(),
                score: -2.3861,
            }),
        };
        assert_eq!(
            format_affinity_line(&found),
            "Users from group 5 are most likely to support Ted Cruz."
        );

        let missing = Affinity {
            entity: "Ted Cruz".to_string(),
            best: None,
        };
        assert!(format_affinity_line(&missing).contains("no guess"));
    }
}
