//! The cleaning step itself.
//!
//! [`pipeline`] applies the filter chain to an in-memory snapshot;
//! [`job`] wraps it in the artifact round-trip: resolve the input snapshot,
//! clean it, publish the result under a new name, remove the local file.

pub mod job;
pub mod pipeline;

pub use job::{run, CleanJob};
pub use pipeline::{CleaningConfig, CleaningOutcome, CleaningPipeline};
