use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::listing;

/// Columns the filters compare against numeric bounds. CSV inference types
/// them as integers when no decimal point appears in the sampled rows.
const FLOAT_COLUMNS: [&str; 3] = [listing::PRICE, listing::LONGITUDE, listing::LATITUDE];

/// Parse a listings CSV file into a Polars DataFrame.
///
/// `price`, `longitude` and `latitude` are cast to Float64 and `last_review`
/// to String when present, so downstream filters see uniform types.
pub fn read_listings_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut lazy_df = df.lazy();

    for col_name in FLOAT_COLUMNS {
        if column_names.iter().any(|c| c == col_name) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::Float64));
        }
    }

    // An all-empty last_review column may be inferred as something other
    // than String; normalization expects string input.
    if column_names.iter().any(|c| c == listing::LAST_REVIEW) {
        lazy_df = lazy_df.with_column(col(listing::LAST_REVIEW).cast(DataType::String));
    }

    lazy_df
        .collect()
        .context("Failed to cast columns to expected types")
}

/// Serialize a snapshot to CSV with a header row and no index column.
pub fn write_listings_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .context("Failed to serialize cleaned table to CSV")?;

    Ok(())
}

/// Fail with a descriptive error when any required column is absent.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let names = df.get_column_names();
    let missing: Vec<&str> = required
        .iter()
        .filter(|required_col| !names.iter().any(|n| n.as_str() == **required_col))
        .copied()
        .collect();

    if !missing.is_empty() {
        bail!("input snapshot is missing required column(s): {}", missing.join(", "));
    }
    Ok(())
}
