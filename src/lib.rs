//! Listings Cleaner - basic cleaning step for the NYC short-term rental dataset
//!
//! Downloads a raw CSV from the experiment tracker's artifact store, drops
//! price outliers, normalizes the `last_review` date column, restricts rows to
//! the NYC bounding box, and publishes the cleaned table as a new artifact.

pub mod cli;
pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod artifacts;
pub mod table;
pub mod cleaning;
pub mod validation;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{CleanerError, CleanerResult};
pub use types::*;
