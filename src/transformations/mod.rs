//! Deterministic row filters and column normalizations.
//!
//! Every transformation is a pure DataFrame-in, DataFrame-out operation with
//! no I/O; the cleaning pipeline composes them in a fixed order.

pub mod dates;
pub mod filters;

pub use dates::normalize_last_review;
pub use filters::{filter_bounding_box, filter_price_range, GeoBounds};
