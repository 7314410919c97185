//! Loading and serializing listings snapshots.
//!
//! Snapshots are delimited tabular text with a header row, UTF-8,
//! comma-separated. The parser casts the columns the filters rely on to the
//! types they expect, since CSV type inference can disagree with them.

pub mod csv_parser;


pub use csv_parser::{read_listings_csv, require_columns, write_listings_csv};
