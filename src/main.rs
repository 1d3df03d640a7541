// src/main.rs
mod utils;
mod serebii;
mod extractors;
mod storage;
mod pipeline;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use utils::AppError;
use extractors::PairingPolicy;
use pipeline::{Pipeline, PipelineConfig};
use serebii::HttpFetcher;
use storage::StorageManager;

/// Scrapes the Generation I Pokédex (#001-#151) into JSON records and sprites.
/// With no arguments, runs the full range into ./data.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory for entry folders and the aggregate file
    #[arg(short, long, default_value = "data")]
    output_dir: PathBuf,

    /// First dex number to scrape
    #[arg(long, default_value_t = pipeline::FIRST_ID)]
    first: u16,

    /// Last dex number to scrape (inclusive)
    #[arg(long, default_value_t = pipeline::LAST_ID)]
    last: u16,

    /// Pause between entries in milliseconds
    #[arg(long, default_value_t = pipeline::DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Site root the dex pages and sprites are fetched from
    #[arg(long, default_value = serebii::client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Drop the damage table when its icon and multiplier rows differ in length
    #[arg(long)]
    strict_damage_pairing: bool,

    /// Debug mode - save raw and annotated HTML for every page
    #[arg(short, long)]
    debug: bool,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            output_dir: args.output_dir,
            first_id: args.first,
            last_id: args.last,
            delay: Duration::from_millis(args.delay_ms),
            damage_pairing: if args.strict_damage_pairing {
                PairingPolicy::Strict
            } else {
                PairingPolicy::Truncate
            },
            debug: args.debug,
            ..PipelineConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments into an explicit pipeline configuration
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);
    let config = PipelineConfig::from(args);
    config.validate()?;

    // 3. Initialize storage and the HTTP fetcher
    let storage = StorageManager::new(&config.output_dir)?;
    let fetcher = HttpFetcher::new(&config.user_agent)?;

    tracing::info!(
        "Scraping #{:03}-#{:03} into {}",
        config.first_id,
        config.last_id,
        storage.base_dir().display()
    );

    // 4. Run the pipeline; per-entry failures never abort the run
    let pipeline = Pipeline::new(fetcher, storage, config);
    let summary = pipeline.run().await?;

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        summary.succeeded.len(),
        summary.failed.len()
    );
    for (id, reason) in &summary.failed {
        tracing::warn!("#{} failed: {}", id, reason);
    }

    Ok(())
}
