//! Basic cleaning step binary.
//!
//! Downloads a raw listings snapshot from the artifact store, drops price
//! outliers, normalizes review dates, restricts rows to the NYC bounding box
//! and republishes the cleaned snapshot as a new versioned artifact.
//!
//! # Usage
//!
//! ```bash
//! rental-clean \
//!   --input_artifact sample.csv:latest \
//!   --output_artifact clean_sample.csv \
//!   --output_type clean_sample \
//!   --output_description "Price range and geolocation cleaned" \
//!   --min_price 10 --max_price 350
//! ```
//!
//! # Environment Variables
//!
//! - `ARTIFACT_STORE_ROOT`: store root directory (default: ./artifact-store)
//! - `RUST_LOG`: log level (default: info)

use std::env;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rental_clean::artifacts::{LocalStore, StoreConfig};
use rental_clean::cleaning::{self, CleanJob};

/// A very basic data cleaning step
#[derive(Debug, Parser)]
#[command(name = "rental-clean")]
struct Args {
    /// Fully-qualified name for the input artifact
    #[arg(long = "input_artifact")]
    input_artifact: String,

    /// Name for the cleaned output artifact
    #[arg(long = "output_artifact")]
    output_artifact: String,

    /// Type tag for the output artifact
    #[arg(long = "output_type")]
    output_type: String,

    /// Human-readable description for the output artifact
    #[arg(long = "output_description")]
    output_description: String,

    /// Minimum value for price
    #[arg(long = "min_price")]
    min_price: f64,

    /// Maximum value for price
    #[arg(long = "max_price")]
    max_price: f64,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    info!("Starting basic cleaning step");

    let config = StoreConfig::from_env()?;
    let store = LocalStore::from_config(&config)?;
    info!(root = %config.root.display(), "artifact store initialized");

    let job = CleanJob {
        input_artifact: args.input_artifact,
        output_artifact: args.output_artifact,
        output_type: args.output_type,
        output_description: args.output_description,
        min_price: args.min_price,
        max_price: args.max_price,
    };

    let published = cleaning::run(&store, &job)?;
    info!(artifact = %published, "cleaning step finished");

    Ok(())
}
