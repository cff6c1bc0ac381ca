//! `last_review` date normalization

use chrono::NaiveDate;

/// Formats seen in the raw listings exports, in order of likelihood.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Parse a raw `last_review` value. Empty or unparseable input yields `None`,
/// which callers must write back as a missing marker rather than drop the row.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}
