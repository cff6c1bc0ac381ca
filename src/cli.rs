//! Command-line interface for the cleaning step
//!
//! Flag names use underscores to stay drop-in compatible with the pipeline
//! orchestrator that invokes this step.

use clap::Parser;
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "listings-cleaner", version, about = "A very basic data cleaning step")]
pub struct Args {
    /// Fully qualified name for the input artifact (e.g. "sample.csv:latest")
    #[arg(long = "input_artifact")]
    pub input_artifact: String,

    /// Name of the artifact that will be created with the cleaned data
    #[arg(long = "output_artifact")]
    pub output_artifact: String,

    /// Type tag of the artifact to be created
    #[arg(long = "output_type")]
    pub output_type: String,

    /// Free-text description of the artifact
    #[arg(long = "output_description")]
    pub output_description: String,

    /// Minimum nightly price to keep a listing
    #[arg(long = "min_price")]
    pub min_price: Decimal,

    /// Maximum nightly price to keep a listing
    #[arg(long = "max_price")]
    pub max_price: Decimal,
}
