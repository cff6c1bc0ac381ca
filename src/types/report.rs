//! Per-run cleaning statistics and the persisted run report

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Counters collected while the cleaning transform runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub rows_in: usize,
    pub rows_out: usize,
    /// Rows dropped because `price` was missing or outside the bounds
    pub dropped_price: usize,
    /// Rows dropped because the listing sits outside the NYC bounding box
    pub dropped_geo: usize,
    /// `last_review` values that could not be parsed and were nulled
    pub dates_nulled: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub input_artifact: String,
    pub output_artifact: String,
    pub output_type: String,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub stats: CleanStats,
}

impl RunReport {
    pub fn new(
        input_artifact: &str,
        output_artifact: &str,
        output_type: &str,
        min_price: Decimal,
        max_price: Decimal,
        stats: CleanStats,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            input_artifact: input_artifact.to_string(),
            output_artifact: output_artifact.to_string(),
            output_type: output_type.to_string(),
            min_price,
            max_price,
            stats,
        }
    }
}
