//! # News Courier
//!
//! Fetches a configured list of news-article pages, extracts structured
//! metadata (title, author, publication date, content excerpt) with
//! best-effort HTML heuristics, normalizes the publication date to ISO-8601,
//! and forwards each record as JSON to a storage API.
//!
//! ## Usage
//!
//! ```sh
//! news_courier -c config.yaml
//! ```
//!
//! ## Architecture
//!
//! Per URL, strictly in sequence, with no state shared across iterations:
//! 1. **Extract**: fetch the page and run the field-detection heuristics
//! 2. **Report**: print the extracted fields to the console
//! 3. **Publish**: POST the record to the storage API (success records only)
//!
//! A failed fetch yields a failure record and skips the publish step; nothing
//! aborts the run, every configured URL is processed exactly once.

use clap::Parser;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod dates;
mod extract;
mod models;
mod publish;
mod utils;

use cli::Cli;
use config::AppConfig;
use models::{ArticleOutcome, ArticleRecord, FetchFailure};
use utils::truncate_for_log;

/// Counters for one full pass over the configured URLs.
#[derive(Debug, Default)]
struct RunSummary {
    processed: usize,
    published: usize,
    publish_failures: usize,
    fetch_failures: usize,
}

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_courier starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.publish_endpoint, "Parsed CLI arguments");

    let mut config = match args.config.as_deref() {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };
    if !args.urls.is_empty() {
        config.urls = args.urls.clone();
    }
    if let Some(endpoint) = args.publish_endpoint {
        config.publish_endpoint = endpoint;
    }

    let summary = run(&config).await?;

    let elapsed = start_time.elapsed();
    info!(
        processed = summary.processed,
        published = summary.published,
        publish_failures = summary.publish_failures,
        fetch_failures = summary.fetch_failures,
        ?elapsed,
        "Execution complete"
    );

    Ok(())
}

/// Process every configured URL exactly once, strictly in sequence.
///
/// One URL is fully handled (fetched, reported, published) before the next
/// begins; the shared client only reuses connections, it never overlaps
/// requests.
#[instrument(level = "info", skip_all)]
async fn run(config: &AppConfig) -> Result<RunSummary, Box<dyn Error>> {
    let urls: Vec<&String> = config.urls.iter().unique().collect();
    if urls.len() < config.urls.len() {
        info!(
            dropped = config.urls.len() - urls.len(),
            "Dropped duplicate URLs"
        );
    }
    info!(count = urls.len(), endpoint = %config.publish_endpoint, "Processing URL list");

    let client = reqwest::Client::new();
    let mut summary = RunSummary::default();

    for url in urls {
        summary.processed += 1;
        match extract::extract(&client, url).await {
            ArticleOutcome::Article(record) => {
                report_article(&record);
                if publish::publish(&client, &config.publish_endpoint, &record).await {
                    summary.published += 1;
                } else {
                    summary.publish_failures += 1;
                }
                println!("{}", serde_json::to_string(&record)?);
            }
            ArticleOutcome::Failed(failure) => {
                summary.fetch_failures += 1;
                error!(
                    url = %failure.url,
                    reason = %failure.reason,
                    "Skipping publish after failed fetch"
                );
                report_failure(&failure);
                println!("{}", serde_json::to_string(&failure)?);
            }
        }
    }

    Ok(summary)
}

/// Print the per-article console report: five field lines and a blank line.
fn report_article(record: &ArticleRecord) {
    println!("url: {}", record.metadata.url);
    println!("title: {}", record.metadata.title);
    println!("published: {}", record.metadata.published);
    println!("author: {}", record.metadata.author);
    println!("content: {}\n", record.content);
    debug!(content_preview = %truncate_for_log(&record.content, 120), "Reported article");
}

/// Console report for a URL whose fetch failed.
fn report_failure(failure: &FetchFailure) {
    println!("url: {}", failure.url);
    println!("error: {}\n", failure.reason);
}
