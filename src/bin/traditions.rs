//! `traditions` command-line tool.
//!
//! Runs the correlation report by default; `expand`, `sync` and `validate`
//! maintain the dataset file.
//!
//! # Environment Variables
//!
//! - `TRADITIONS_DATA` — dataset path (default: `data/traditions.json`)
//! - `TRADITIONS_SHEET_ID` / `TRADITIONS_SHEET_URL` — sheet to sync from
//! - `RUST_LOG` — tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin traditions
//! cargo run --bin traditions -- expand
//! cargo run --bin traditions -- sync --sheet-id <ID>
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use traditions::analysis::{Analyzer, Report};
use traditions::config::{SheetConfig, DEFAULT_TIMEOUT_SECS};
use traditions::dataset::{validate, DatasetStore, ValidationReport, DEFAULT_DATA_PATH};
use traditions::expand::{builtin_batch, expand};
use traditions::sync::{sync_dataset, FileSheetSource, HttpSheetSource, SheetSource};

#[derive(Parser)]
#[command(name = "traditions")]
#[command(about = "Correlation analysis over the wellbeing traditions dataset", version)]
struct Cli {
    /// Dataset file
    #[arg(long, global = true, env = "TRADITIONS_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the correlation and pattern report (default)
    Analyze,

    /// Append the built-in batch of traditions to the dataset
    Expand,

    /// Replace the dataset with a spreadsheet export
    Sync {
        /// Google Sheet id (sheet must be published as CSV)
        #[arg(long, env = "TRADITIONS_SHEET_ID")]
        sheet_id: Option<String>,

        /// Full CSV export URL, overrides --sheet-id
        #[arg(long, env = "TRADITIONS_SHEET_URL")]
        url: Option<String>,

        /// Import a local CSV file instead of fetching (takes precedence)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// HTTP timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },

    /// Check ids, score ranges and lineage references
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let store = DatasetStore::new(&cli.data);

    match cli.command.unwrap_or(Command::Analyze) {
        Command::Analyze => analyze(&store),
        Command::Expand => run_expand(&store),
        Command::Sync {
            sheet_id,
            url,
            csv,
            timeout_secs,
        } => {
            let source: Box<dyn SheetSource> = match csv {
                Some(path) => Box::new(FileSheetSource::new(path)),
                None => {
                    let Some(config) = SheetConfig::resolve(url.as_deref(), sheet_id.as_deref())
                    else {
                        bail!("no sheet configured: pass --sheet-id, --url or --csv");
                    };
                    let config = config.with_timeout(Duration::from_secs(timeout_secs));
                    Box::new(HttpSheetSource::new(config)?)
                }
            };
            let count = sync_dataset(source.as_ref(), &store)
                .await
                .context("Sync failed; dataset left unchanged")?;
            println!("✓ Synced {} traditions into {}", count, store.path().display());
            Ok(())
        }
        Command::Validate => {
            let doc = store.load().context("Failed to load dataset")?;
            let report = validate(&doc);
            log_validation(&report);
            if !report.errors.is_empty() {
                bail!("{} validation error(s)", report.errors.len());
            }
            println!("✓ {} traditions valid", doc.traditions.len());
            Ok(())
        }
    }
}

fn analyze(store: &DatasetStore) -> Result<()> {
    let doc = store.load().context("Failed to load dataset")?;
    log_validation(&validate(&doc));

    let report = Report::build(&Analyzer::new(&doc.traditions));
    print!("{}", report);
    Ok(())
}

fn run_expand(store: &DatasetStore) -> Result<()> {
    let mut doc = store.load().context("Failed to load dataset")?;
    let batch = builtin_batch()?;
    let outcome = expand(&mut doc, batch);
    store.save(&doc).context("Failed to write dataset")?;

    println!("✓ Expanded to {} total traditions", doc.traditions.len());
    println!("  Added {} new traditions", outcome.added.len());
    if !outcome.skipped.is_empty() {
        println!("  Skipped {} already present", outcome.skipped.len());
    }
    Ok(())
}

fn log_validation(report: &ValidationReport) {
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &report.errors {
        tracing::error!("{}", error);
    }
}
