//! Required-column checks on the downloaded table

use crate::errors::{CleanerError, CleanerResult};
use crate::table::DataFrame;

/// Fail fast if any column the transform reads is absent.
pub fn require_columns(frame: &DataFrame, columns: &[&str]) -> CleanerResult<()> {
    for &column in columns {
        if frame.column_index(column).is_none() {
            return Err(CleanerError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_frame_with_all_columns() {
        let frame = DataFrame::new(
            vec!["price".into(), "last_review".into(), "longitude".into(), "latitude".into()],
            vec![],
        );
        assert!(require_columns(&frame, &crate::cleaning::REQUIRED_COLUMNS).is_ok());
    }

    #[test]
    fn names_the_first_missing_column() {
        let frame = DataFrame::new(vec!["price".into()], vec![]);
        let err = require_columns(&frame, &["price", "last_review", "longitude"]).unwrap_err();
        assert!(matches!(
            err,
            CleanerError::MissingColumn { ref column } if column == "last_review"
        ));
    }
}
