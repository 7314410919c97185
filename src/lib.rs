//! Cleaning step for short-term rental listing snapshots.
//!
//! Downloads a raw listings snapshot from an artifact store, drops price
//! outliers, normalizes the `last_review` date column, restricts rows to the
//! New York City bounding box and republishes the result as a new versioned
//! artifact.

pub mod artifacts;
pub mod cleaning;
pub mod listing;
pub mod parsing;
pub mod transformations;
