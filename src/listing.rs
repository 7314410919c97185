//! Column names of the listings snapshot schema.
//!
//! Only the columns the cleaning step touches are named here; any other
//! column in the snapshot passes through untouched.

/// Nightly price in USD.
pub const PRICE: &str = "price";
/// Listing longitude in degrees.
pub const LONGITUDE: &str = "longitude";
/// Listing latitude in degrees.
pub const LATITUDE: &str = "latitude";
/// Date of the most recent review, `YYYY-MM-DD`.
pub const LAST_REVIEW: &str = "last_review";

/// Columns the cleaning step requires in the input snapshot.
pub const REQUIRED_COLUMNS: [&str; 4] = [PRICE, LONGITUDE, LATITUDE, LAST_REVIEW];
