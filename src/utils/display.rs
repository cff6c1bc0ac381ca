//! Display and printing utilities

use tracing::info;

use crate::types::{ArtifactEntry, RunReport};

pub fn print_run_summary(report: &RunReport, published: &ArtifactEntry) {
    let stats = &report.stats;
    let kept_pct = if stats.rows_in > 0 {
        (stats.rows_out as f64 / stats.rows_in as f64) * 100.0
    } else {
        0.0
    };

    info!("\n📊 Cleaning Summary (run {})", report.run_id);
    info!("   Input artifact: {}", report.input_artifact);
    info!("   Published as: {}", published.qualified_name());
    info!("   Price bounds: [{}, {}]", report.min_price, report.max_price);
    info!("   Rows in: {}", stats.rows_in);
    info!("   Rows out: {} ({:.1}% kept)", stats.rows_out, kept_pct);
    info!("   Dropped by price filter: {}", stats.dropped_price);
    info!("   Dropped outside NYC box: {}", stats.dropped_geo);
    info!("   Unparseable dates nulled: {}", stats.dates_nulled);
}
