//! A small column-named, row-ordered table backed by text cells
//!
//! Cells stay as strings so that passthrough columns survive the cleaning
//! pass byte-for-byte; typed access happens per cell at filter time.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrame {
    /// Column names, from the CSV header row
    pub headers: Vec<String>,
    /// Each data row, one cell per column
    pub rows: Vec<Vec<String>>,
}

impl DataFrame {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Load a CSV file with a header row.
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path.as_ref())
            .with_context(|| format!("Failed to open CSV at {}", path.as_ref().display()))?;

        let headers = rdr
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.context("Malformed CSV record")?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Write the table back out as a CSV file with a header row.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .from_path(path.as_ref())
            .with_context(|| format!("Failed to create CSV at {}", path.as_ref().display()))?;

        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush().context("Failed to flush CSV writer")?;

        Ok(())
    }

    /// Index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_csv_with_headers() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "id,price,last_review")?;
        writeln!(tmp, "1,150,2019-05-21")?;
        writeln!(tmp, "2,80,")?;

        let frame = DataFrame::read_csv(tmp.path())?;

        assert_eq!(frame.headers, vec!["id", "price", "last_review"]);
        assert_eq!(frame.num_rows(), 2);
        assert_eq!(frame.rows[0], vec!["1", "150", "2019-05-21"]);
        assert_eq!(frame.rows[1], vec!["2", "80", ""]);
        Ok(())
    }

    #[test]
    fn roundtrips_through_write_and_read() -> Result<()> {
        let frame = DataFrame::new(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "x".into()],
                vec!["2".into(), "".into()],
            ],
        );

        let tmp = NamedTempFile::new()?;
        frame.write_csv(tmp.path())?;
        let back = DataFrame::read_csv(tmp.path())?;

        assert_eq!(back, frame);
        Ok(())
    }

    #[test]
    fn column_index_finds_named_columns() {
        let frame = DataFrame::new(vec!["price".into(), "latitude".into()], vec![]);
        assert_eq!(frame.column_index("latitude"), Some(1));
        assert_eq!(frame.column_index("longitude"), None);
    }
}
