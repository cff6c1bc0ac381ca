//! Run report storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::types::RunReport;

pub fn save_run_report(report: &RunReport, output_dir: &str) -> Result<()> {
    let filename = Path::new(output_dir)
        .join("reports")
        .join(format!("cleaning_{}.jsonl", Utc::now().format("%Y-%m-%d")));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(report)?)?;

    info!(
        run_id = %report.run_id,
        rows_in = report.stats.rows_in,
        rows_out = report.stats.rows_out,
        "Saved cleaning run report"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CleanStats;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn appends_one_json_line_per_run() -> Result<()> {
        let dir = tempdir()?;
        std::fs::create_dir_all(dir.path().join("reports"))?;
        let output_dir = dir.path().to_str().unwrap();

        let report = RunReport::new(
            "sample.csv:latest",
            "clean_sample.csv",
            "clean_sample",
            dec!(10),
            dec!(350),
            CleanStats {
                rows_in: 4,
                rows_out: 2,
                dropped_price: 1,
                dropped_geo: 1,
                dates_nulled: 1,
            },
        );

        save_run_report(&report, output_dir)?;
        save_run_report(&report, output_dir)?;

        let filename = Path::new(output_dir)
            .join("reports")
            .join(format!("cleaning_{}.jsonl", Utc::now().format("%Y-%m-%d")));
        let contents = std::fs::read_to_string(filename)?;
        assert_eq!(contents.lines().count(), 2);

        let parsed: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap())?;
        assert_eq!(parsed["stats"]["rows_out"], 2);
        Ok(())
    }
}
