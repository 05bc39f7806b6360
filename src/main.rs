use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use cohortrank::cohorts::CohortAssigner;
use cohortrank::config::Config;
use cohortrank::corpus::{reader, stats};
use cohortrank::output::{json, terminal};
use cohortrank::pipeline::{self, affinity};
use cohortrank::tokenize::tweet::TweetTokenizer;

/// Cohortrank: relative token popularity across user cohorts.
///
/// Reads newline-delimited tweet JSON, groups authors into cohorts, and
/// reports which tokens each cohort uses disproportionately often.
#[derive(Parser)]
#[command(name = "cohortrank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the tweets come from.
#[derive(Args)]
struct InputArgs {
    /// Newline-delimited tweet JSON files
    inputs: Vec<PathBuf>,

    /// File listing input paths, one per line (added to any positional inputs)
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count distinct authors among valid tweets
    Users {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Count posts from each cohort, unassigned users included
    Posts {
        #[command(flatten)]
        input: InputArgs,

        /// JSON mapping of user id to cohort id (overrides COHORTRANK_PARTITION)
        #[arg(long)]
        partition: Option<PathBuf>,

        /// Number of real cohorts (default: 7)
        #[arg(long)]
        cohorts: Option<u32>,
    },

    /// Rank tokens by relative popularity in each cohort
    Rank {
        #[command(flatten)]
        input: InputArgs,

        /// JSON mapping of user id to cohort id (overrides COHORTRANK_PARTITION)
        #[arg(long)]
        partition: Option<PathBuf>,

        /// Number of real cohorts (default: 7)
        #[arg(long)]
        cohorts: Option<u32>,

        /// Minimum distinct users mentioning a token (default: 100)
        #[arg(long)]
        min_users: Option<u64>,

        /// Tokens listed per cohort (default: 10)
        #[arg(long)]
        top_k: Option<usize>,

        /// Tokens in the overall most-mentioned list (default: 20)
        #[arg(long)]
        overall_top: Option<usize>,

        /// JSON entity file for affinity guesses (default: the 2016 candidates)
        #[arg(long)]
        entities: Option<PathBuf>,

        /// Also write the full report as JSON to this path
        #[arg(long = "json")]
        json_out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cohortrank=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Users { input } => {
            let corpus = reader::load_documents(&input_paths(&input)?)?;
            terminal::display_unique_users(stats::count_unique_users(&corpus.documents));
        }

        Commands::Posts {
            input,
            partition,
            cohorts,
        } => {
            let mut config = Config::load()?;
            apply_overrides(&mut config, partition, cohorts, None, None, None, None);
            let assigner = load_assigner(&config)?;
            let corpus = reader::load_documents(&input_paths(&input)?)?;

            let counts = stats::count_posts_by_cohort(&corpus.documents, &assigner);
            terminal::display_post_counts(&counts);
        }

        Commands::Rank {
            input,
            partition,
            cohorts,
            min_users,
            top_k,
            overall_top,
            entities,
            json_out,
        } => {
            let mut config = Config::load()?;
            apply_overrides(
                &mut config,
                partition,
                cohorts,
                min_users,
                top_k,
                overall_top,
                entities,
            );
            config.ranking.validate()?;

            let assigner = load_assigner(&config)?;
            let corpus = reader::load_documents(&input_paths(&input)?)?;
            let tokenizer = TweetTokenizer::default();

            info!(
                documents = corpus.documents.len(),
                min_users = config.ranking.min_users,
                top_k = config.ranking.top_k,
                "Ranking tokens"
            );
            let report = pipeline::run(&corpus.documents, &tokenizer, &assigner, &config.ranking);

            let entity_list = match &config.entities_path {
                Some(path) => affinity::load_entities(path)?,
                None => affinity::default_entities(),
            };
            let affinities =
                affinity::infer_affinities(&entity_list, &report.cohorts, assigner.fallback());

            terminal::display_unique_users(report.users);
            terminal::display_overall(&report);
            terminal::display_cohort_rankings(&report, assigner.fallback());
            terminal::display_affinities(&affinities);

            if let Some(path) = json_out {
                let saved = json::write_report(
                    &json::JsonReport {
                        generated_at: chrono::Utc::now(),
                        min_users: config.ranking.min_users,
                        top_k: config.ranking.top_k,
                        fallback_cohort: assigner.fallback(),
                        report,
                        affinities,
                    },
                    path,
                )?;
                println!("\n{}", format!("JSON report saved to: {saved}").bold());
            }
        }
    }

    Ok(())
}

/// Positional inputs plus anything listed in the manifest.
fn input_paths(input: &InputArgs) -> Result<Vec<PathBuf>> {
    let mut paths = input.inputs.clone();
    if let Some(manifest) = &input.manifest {
        paths.extend(reader::read_manifest(manifest)?);
    }
    Ok(paths)
}

/// Command-line flags win over environment configuration.
fn apply_overrides(
    config: &mut Config,
    partition: Option<PathBuf>,
    cohorts: Option<u32>,
    min_users: Option<u64>,
    top_k: Option<usize>,
    overall_top: Option<usize>,
    entities: Option<PathBuf>,
) {
    if partition.is_some() {
        config.partition_path = partition;
    }
    if entities.is_some() {
        config.entities_path = entities;
    }
    if let Some(n) = cohorts {
        config.ranking.cohort_count = n;
    }
    if let Some(n) = min_users {
        config.ranking.min_users = n;
    }
    if let Some(k) = top_k {
        config.ranking.top_k = k;
    }
    if let Some(n) = overall_top {
        config.ranking.overall_top = n;
    }
}

fn load_assigner(config: &Config) -> Result<CohortAssigner> {
    let path = config.require_partition()?;
    CohortAssigner::load(path, config.ranking.cohort_count)
}
