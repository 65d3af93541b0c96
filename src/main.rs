//! # Release Digest
//!
//! Downloads the z/OS Open Tools release feed and renders it as a markdown
//! page listing newly released tools, grouped by day.
//!
//! ## Usage
//!
//! ```sh
//! release_digest -o Newly_released_tools.md
//! ```
//!
//! ## Architecture
//!
//! The run is strictly sequential:
//! 1. **Fetching**: GET the JSON feed and pull out `release_data`
//! 2. **Grouping**: bucket every release by calendar date, then by tool
//! 3. **Output**: write the markdown digest, newest date first

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod digest;
mod feed;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use digest::build_digest;
use feed::{fetch_feed, FEED_URL};
use outputs::markdown;

#[tokio::main]
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
    info!("release_digest starting up");

    let args = Cli::parse();
    debug!(output = %args.output, "Parsed CLI arguments");

    // ---- Fetch ----
    let feed = fetch_feed(FEED_URL).await.inspect_err(|e| {
        error!(url = FEED_URL, error = %e, "Failed to fetch release feed");
    })?;

    // ---- Group ----
    let digest = build_digest(&feed).inspect_err(|e| {
        error!(error = %e, "Failed to build release digest");
    })?;

    // ---- Markdown output ----
    info!(path = %args.output, "Writing Markdown");
    markdown::write_digest(&digest, &args.output)
        .await
        .inspect_err(|e| {
            error!(path = %args.output, error = %e, "Failed writing Markdown");
        })?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
