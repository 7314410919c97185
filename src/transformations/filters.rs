use polars::prelude::*;

use crate::listing;

/// Geographic bounding box in degrees.
///
/// The default covers the New York City area; listings geolocated outside it
/// are treated as mislabeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            lon_min: -74.25,
            lon_max: -73.50,
            lat_min: 40.5,
            lat_max: 41.2,
        }
    }
}

/// Keep rows whose `price` lies in the closed interval `[min_price, max_price]`.
///
/// Rows with a null price satisfy no bound and are dropped. Bounds are taken
/// as given; an inverted interval yields an empty frame.
pub fn filter_price_range(
    df: DataFrame,
    min_price: f64,
    max_price: f64,
) -> PolarsResult<DataFrame> {
    df.lazy()
        .filter(
            col(listing::PRICE)
                .gt_eq(lit(min_price))
                .and(col(listing::PRICE).lt_eq(lit(max_price))),
        )
        .collect()
}

/// Keep rows whose coordinates fall inside the closed bounding box.
///
/// Rows with null coordinates are dropped.
pub fn filter_bounding_box(df: DataFrame, bounds: &GeoBounds) -> PolarsResult<DataFrame> {
    df.lazy()
        .filter(
            col(listing::LONGITUDE)
                .gt_eq(lit(bounds.lon_min))
                .and(col(listing::LONGITUDE).lt_eq(lit(bounds.lon_max)))
                .and(col(listing::LATITUDE).gt_eq(lit(bounds.lat_min)))
                .and(col(listing::LATITUDE).lt_eq(lit(bounds.lat_max))),
        )
        .collect()
}
