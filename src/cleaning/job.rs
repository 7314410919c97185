use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::artifacts::{ArtifactRef, ArtifactStore};
use crate::cleaning::pipeline::{CleaningConfig, CleaningPipeline};
use crate::parsing::csv_parser;
use crate::transformations::GeoBounds;

/// One cleaning run: which artifact to read, what to publish, and the price
/// bounds to enforce.
#[derive(Debug, Clone)]
pub struct CleanJob {
    pub input_artifact: String,
    pub output_artifact: String,
    pub output_type: String,
    pub output_description: String,
    pub min_price: f64,
    pub max_price: f64,
}

/// Run the cleaning step end to end against the given artifact store.
///
/// Resolves the input snapshot, applies the filters, writes the cleaned
/// table to a file named after the output artifact, publishes it and removes
/// the local file. The file is removed only after a successful publish, so a
/// failed upload leaves it on disk.
pub fn run(store: &dyn ArtifactStore, job: &CleanJob) -> Result<ArtifactRef> {
    info!(artifact = %job.input_artifact, "downloading input artifact");
    let input_path = store
        .resolve(&job.input_artifact)
        .with_context(|| format!("failed to resolve input artifact '{}'", job.input_artifact))?;

    let df = csv_parser::read_listings_csv(&input_path)?;

    let pipeline = CleaningPipeline::new(CleaningConfig {
        min_price: job.min_price,
        max_price: job.max_price,
        bounds: GeoBounds::default(),
    });
    let outcome = pipeline.apply(df)?;
    info!(
        kept = outcome.dataframe.height(),
        dropped_price = outcome.rows_dropped_price,
        dropped_geo = outcome.rows_dropped_geo,
        "outliers dropped"
    );

    let mut cleaned = outcome.dataframe;
    let output_path = PathBuf::from(&job.output_artifact);
    csv_parser::write_listings_csv(&output_path, &mut cleaned)?;

    info!(artifact = %job.output_artifact, "publishing cleaned artifact");
    let published = store
        .publish(
            &output_path,
            &job.output_artifact,
            &job.output_type,
            &job.output_description,
        )
        .with_context(|| format!("failed to publish artifact '{}'", job.output_artifact))?;

    fs::remove_file(&output_path)
        .with_context(|| format!("failed to remove temporary file {}", output_path.display()))?;

    Ok(published)
}
