//! # Awful News Clusters
//!
//! Turns a noisy, duplicate-laden batch of RSS articles into a small set of
//! diverse, importance-ranked topic clusters for downstream summarization.
//!
//! ## Usage
//!
//! ```sh
//! awful_news_clusters -i ./articles.json -o ./clusters
//! ```
//!
//! ## Architecture
//!
//! A run is a single synchronous pass over one in-memory batch:
//! 1. **Loading**: Read the batch written by the feed ingestion step
//! 2. **Preparing**: Validate, collapse URL duplicates, drop sports/entertainment
//! 3. **Vectorizing**: Tokenize, tag entities, build TF-IDF vectors
//! 4. **Clustering**: Greedy seed-only grouping with importance scores
//! 5. **Selecting**: Per-category quotas, duplicate skipping, backfill
//! 6. **Output**: Write the JSON cluster report

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod cluster;
mod config;
mod dedup;
mod error;
mod models;
mod outputs;
mod pipeline;
mod select;
mod similarity;
mod source;
mod text;
mod tfidf;
mod utils;

use cli::Cli;
use config::ClusterConfig;
use outputs::json;
use source::{ArticleSource, JsonFileSource};
use utils::ensure_writable_dir;

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
    info!("news_clusters starting up");

    let args = Cli::parse();
    debug!(?args.input, ?args.output_dir, ?args.config, "Parsed CLI arguments");

    // Fail before doing any work if the report cannot be written
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let config = ClusterConfig::load(args.config.as_deref()).await?;

    let batch = JsonFileSource::new(&args.input).load().await.inspect_err(|e| {
        error!(error = %e, "No usable article batch; refusing to cluster");
    })?;

    let report = pipeline::run(batch, &config, Utc::now())?;
    info!(clusters = report.cluster_count, "Selected clusters");
    for cluster in &report.clusters {
        debug!(
            id = cluster.id,
            category = %cluster.category,
            importance = cluster.importance,
            articles = cluster.articles.len(),
            topic = %cluster.topic,
            "Selected cluster"
        );
    }

    let path = json::write_report(&report, &args.output_dir).await?;
    info!(path = %path.display(), "Wrote cluster report");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
