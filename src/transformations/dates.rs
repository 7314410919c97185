use polars::prelude::*;

use crate::listing;

/// Convert the `last_review` column from string to a Date column in place.
///
/// Values that do not parse as `%Y-%m-%d` (including empty fields) become
/// null; the row is kept. A column that is already a Date column is returned
/// unchanged, so re-running the cleaning on its own output is a no-op.
pub fn normalize_last_review(df: DataFrame) -> PolarsResult<DataFrame> {
    if df.column(listing::LAST_REVIEW)?.dtype() == &DataType::Date {
        return Ok(df);
    }

    df.lazy()
        .with_column(col(listing::LAST_REVIEW).str().to_date(StrptimeOptions {
            format: Some("%Y-%m-%d".into()),
            strict: false,
            ..Default::default()
        }))
        .collect()
}
