//! Listings Cleaner - Main Entry Point
//!
//! Basic cleaning step of the NYC rental pricing pipeline: download the raw
//! dataset from the artifact store, apply some basic cleaning, and export the
//! result as a new artifact.

use listings_cleaner::*;
use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = cli::Args::parse();

    // Initialize logging
    let config = CONFIG.clone();
    let _logging_guard = utils::setup_logging(&config.output_dir)?;
    utils::setup_output_directories(&config.output_dir)?;

    info!("🧹 Listings Cleaner v0.2.0 - basic cleaning step");
    info!("📋 Configuration:");
    info!("   Tracker: {}", config.tracker_base_url);
    info!("   Input artifact: {}", args.input_artifact);
    info!("   Output artifact: {} ({})", args.output_artifact, args.output_type);
    info!("   Price bounds: [{}, {}]", args.min_price, args.max_price);

    // The cleaner itself assumes ordered bounds, so check them here
    if args.min_price > args.max_price {
        return Err(anyhow::anyhow!(
            "Invalid price bounds: min_price {} exceeds max_price {}",
            args.min_price,
            args.max_price
        ));
    }

    let client = artifacts::ArtifactClient::new(&config)?;
    let data_dir = Path::new(&config.output_dir).join("data");

    info!("⬇️  Downloading input artifact");
    let raw_path = client.download(&args.input_artifact, &data_dir).await?;

    let frame = table::DataFrame::read_csv(&raw_path)?;
    info!("Loaded {} rows from {}", frame.num_rows(), raw_path.display());

    validation::require_columns(&frame, &cleaning::REQUIRED_COLUMNS)?;

    info!("🧽 Dropping outliers and fixing data types");
    let bounds = cleaning::PriceBounds {
        min: args.min_price,
        max: args.max_price,
    };
    let (clean_frame, stats) = cleaning::clean(&frame, &bounds)?;

    info!("💾 Saving cleaned data to csv");
    let out_path = data_dir.join("clean_sample.csv");
    clean_frame.write_csv(&out_path)?;

    info!("⬆️  Uploading cleaned data as artifact");
    let spec = ArtifactSpec {
        name: args.output_artifact.clone(),
        artifact_type: args.output_type.clone(),
        description: args.output_description.clone(),
    };
    let entry = client.publish(&out_path, &spec).await?;

    let report = RunReport::new(
        &args.input_artifact,
        &args.output_artifact,
        &args.output_type,
        args.min_price,
        args.max_price,
        stats,
    );
    storage::save_run_report(&report, &config.output_dir)?;
    utils::print_run_summary(&report, &entry);

    Ok(())
}
