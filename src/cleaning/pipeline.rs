use anyhow::{Context, Result};
use polars::prelude::*;

use crate::listing;
use crate::parsing::csv_parser::require_columns;
use crate::transformations::{
    filter_bounding_box, filter_price_range, normalize_last_review, GeoBounds,
};

/// Bounds applied by the cleaning pass.
#[derive(Debug, Clone)]
pub struct CleaningConfig {
    pub min_price: f64,
    pub max_price: f64,
    pub bounds: GeoBounds,
}

/// Cleaned table plus row accounting for logging.
#[derive(Debug)]
pub struct CleaningOutcome {
    pub dataframe: DataFrame,
    pub rows_input: usize,
    pub rows_dropped_price: usize,
    pub rows_dropped_geo: usize,
}

/// Applies the filter chain to a parsed snapshot.
pub struct CleaningPipeline {
    config: CleaningConfig,
}

impl CleaningPipeline {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Clean one snapshot.
    ///
    /// Bounds are taken as given; `min_price > max_price` yields an empty
    /// result rather than an error.
    pub fn apply(&self, df: DataFrame) -> Result<CleaningOutcome> {
        require_columns(&df, &listing::REQUIRED_COLUMNS)?;
        let rows_input = df.height();

        // Step 1: drop price outliers
        let df = filter_price_range(df, self.config.min_price, self.config.max_price)
            .context("Failed to filter price range")?;
        let rows_after_price = df.height();

        // Step 2: normalize review dates
        let df = normalize_last_review(df).context("Failed to normalize last_review")?;

        // Step 3: restrict to the geographic bounding box
        let df = filter_bounding_box(df, &self.config.bounds)
            .context("Failed to apply bounding box filter")?;

        Ok(CleaningOutcome {
            rows_input,
            rows_dropped_price: rows_input - rows_after_price,
            rows_dropped_geo: rows_after_price - df.height(),
            dataframe: df,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min_price: f64, max_price: f64) -> CleaningConfig {
        CleaningConfig {
            min_price,
            max_price,
            bounds: GeoBounds::default(),
        }
    }

    /// One row per failure mode: price too high, longitude west of the box,
    /// latitude north of it, plus three rows that pass every bound.
    fn sample_frame() -> DataFrame {
        df!(
            "id" => [1i64, 2, 3, 4, 5, 6],
            "price" => [50.0, 500.0, 50.0, 50.0, 10.0, 100.0],
            "longitude" => [-73.9, -73.9, -75.0, -73.9, -73.95, -73.8],
            "latitude" => [40.7, 40.7, 40.7, 42.0, 40.65, 40.8],
            "last_review" => [Some("2019-05-01"), Some("2019-04-12"), Some("2019-03-02"), Some("2018-11-20"), None, Some("not a date")],
        )
        .unwrap()
    }

    #[test]
    fn test_row_survives_iff_all_bounds_hold() {
        let pipeline = CleaningPipeline::new(config(10.0, 100.0));
        let outcome = pipeline.apply(sample_frame()).unwrap();

        assert_eq!(outcome.rows_input, 6);
        assert_eq!(outcome.rows_dropped_price, 1);
        assert_eq!(outcome.rows_dropped_geo, 2);
        assert_eq!(outcome.dataframe.height(), 3);

        let ids: Vec<i64> = outcome
            .dataframe
            .column("id")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(ids, vec![1, 5, 6]);
    }

    #[test]
    fn test_last_review_normalized_in_output() {
        let pipeline = CleaningPipeline::new(config(10.0, 100.0));
        let outcome = pipeline.apply(sample_frame()).unwrap();

        let reviews = outcome.dataframe.column("last_review").unwrap();
        assert_eq!(reviews.dtype(), &DataType::Date);
        // id 1 has a parseable date, ids 5 and 6 do not.
        assert_eq!(reviews.null_count(), 2);
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let pipeline = CleaningPipeline::new(config(10.0, 100.0));
        let once = pipeline.apply(sample_frame()).unwrap();
        let twice = pipeline.apply(once.dataframe.clone()).unwrap();

        assert!(once.dataframe.equals_missing(&twice.dataframe));
        assert_eq!(twice.rows_dropped_price, 0);
        assert_eq!(twice.rows_dropped_geo, 0);
    }

    #[test]
    fn test_missing_column_aborts_with_named_column() {
        let df = df!(
            "id" => [1i64],
            "longitude" => [-73.9],
            "latitude" => [40.7],
            "last_review" => ["2019-05-01"],
        )
        .unwrap();

        let pipeline = CleaningPipeline::new(config(10.0, 100.0));
        let err = pipeline.apply(df).unwrap_err();
        assert!(format!("{err:#}").contains("price"));
    }

    #[test]
    fn test_inverted_bounds_produce_empty_output() {
        let pipeline = CleaningPipeline::new(config(100.0, 10.0));
        let outcome = pipeline.apply(sample_frame()).unwrap();

        assert_eq!(outcome.dataframe.height(), 0);
        assert_eq!(outcome.rows_dropped_price, 6);
    }
}
