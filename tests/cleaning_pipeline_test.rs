//! End-to-end test of the local cleaning path: CSV in, CSV out.

use anyhow::Result;
use listings_cleaner::cleaning::{self, PriceBounds};
use listings_cleaner::table::DataFrame;
use listings_cleaner::validation;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

const RAW_CSV: &str = "\
id,name,price,last_review,longitude,latitude,room_type
1,cozy loft,150,2019-05-21,-73.95,40.75,Entire home/apt
2,gold plated suite,5000,2019-05-21,-73.95,40.75,Entire home/apt
3,new jersey actually,150,2019-05-21,-72.0,40.75,Private room
4,never reviewed,80,,-73.98,40.70,Private room
5,weird date,90,not-a-date,-73.92,40.80,Shared room
6,free tent,0,2019-01-01,-73.95,40.75,Shared room
";

#[test]
fn cleans_raw_csv_end_to_end() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all(RAW_CSV.as_bytes())?;

    let frame = DataFrame::read_csv(input.path())?;
    validation::require_columns(&frame, &cleaning::REQUIRED_COLUMNS)?;

    let bounds = PriceBounds {
        min: dec!(10),
        max: dec!(350),
    };
    let (clean_frame, stats) = cleaning::clean(&frame, &bounds)?;

    let output = NamedTempFile::new()?;
    clean_frame.write_csv(output.path())?;
    let reread = DataFrame::read_csv(output.path())?;

    // Rows 2 (price), 3 (geo) and 6 (price) are gone; 1, 4, 5 survive in order
    assert_eq!(reread.num_rows(), 3);
    let ids: Vec<&str> = reread.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "4", "5"]);

    // Passthrough column survives untouched
    assert_eq!(reread.rows[0][6], "Entire home/apt");

    // Unparseable date was nulled, not dropped
    let review_idx = reread.column_index("last_review").unwrap();
    assert_eq!(reread.rows[2][review_idx], "");

    assert_eq!(stats.rows_in, 6);
    assert_eq!(stats.rows_out, 3);
    assert_eq!(stats.dropped_price, 2);
    assert_eq!(stats.dropped_geo, 1);
    assert_eq!(stats.dates_nulled, 1);

    // Re-cleaning the output with the same bounds is a no-op
    let (again, again_stats) = cleaning::clean(&reread, &bounds)?;
    assert_eq!(again, reread);
    assert_eq!(again_stats.rows_out, again_stats.rows_in);

    Ok(())
}
