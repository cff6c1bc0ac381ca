//! Row filters over the raw listings table

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::config::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::errors::{CleanerError, CleanerResult};
use crate::table::DataFrame;
use crate::types::CleanStats;

use super::dates::normalize_date;

/// Columns the cleaning pass reads. Anything else passes through untouched.
pub const REQUIRED_COLUMNS: [&str; 4] = ["price", "last_review", "longitude", "latitude"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBounds {
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Apply the cleaning pass: drop price outliers, normalize `last_review`,
/// drop rows outside the NYC bounding box. Pure with respect to the input
/// frame; row order is preserved and an empty result is valid.
pub fn clean(frame: &DataFrame, bounds: &PriceBounds) -> CleanerResult<(DataFrame, CleanStats)> {
    let price_idx = require_column(frame, "price")?;
    let review_idx = require_column(frame, "last_review")?;
    let lon_idx = require_column(frame, "longitude")?;
    let lat_idx = require_column(frame, "latitude")?;

    let mut stats = CleanStats {
        rows_in: frame.num_rows(),
        ..CleanStats::default()
    };

    let mut rows = Vec::with_capacity(frame.num_rows());

    for (row_no, row) in frame.rows.iter().enumerate() {
        // Price filter: a missing or unparseable price fails the interval test
        let price = row
            .get(price_idx)
            .and_then(|cell| Decimal::from_str(cell.trim()).ok());
        match price {
            Some(p) if bounds.contains(p) => {}
            _ => {
                stats.dropped_price += 1;
                debug!(row = row_no, "Dropped row outside price bounds");
                continue;
            }
        }

        // Boundary check: both coordinates must parse and sit inside the box
        if !in_nyc_bounding_box(row.get(lon_idx), row.get(lat_idx)) {
            stats.dropped_geo += 1;
            debug!(row = row_no, "Dropped row outside NYC bounding box");
            continue;
        }

        // Type fix: rewrite last_review as ISO date, null what cannot parse
        let mut row = row.clone();
        let raw_review = row[review_idx].trim().to_string();
        match normalize_date(&raw_review) {
            Some(date) => row[review_idx] = date.format("%Y-%m-%d").to_string(),
            None => {
                if !raw_review.is_empty() {
                    stats.dates_nulled += 1;
                }
                row[review_idx] = String::new();
            }
        }

        rows.push(row);
    }

    stats.rows_out = rows.len();

    Ok((DataFrame::new(frame.headers.clone(), rows), stats))
}

fn require_column(frame: &DataFrame, name: &str) -> CleanerResult<usize> {
    frame
        .column_index(name)
        .ok_or_else(|| CleanerError::MissingColumn {
            column: name.to_string(),
        })
}

fn in_nyc_bounding_box(lon: Option<&String>, lat: Option<&String>) -> bool {
    let lon = match lon.and_then(|c| c.trim().parse::<f64>().ok()) {
        Some(v) => v,
        None => return false,
    };
    let lat = match lat.and_then(|c| c.trim().parse::<f64>().ok()) {
        Some(v) => v,
        None => return false,
    };

    (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&lon) && (LATITUDE_MIN..=LATITUDE_MAX).contains(&lat)
}
