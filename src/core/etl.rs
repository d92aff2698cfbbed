use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. The first failing stage
    /// aborts the run.
    pub async fn run(&self) -> Result<LoadSummary> {
        tracing::info!("Starting ETL process...");

        tracing::debug!("Extracting data...");
        let raw_data = self.pipeline.extract().await?;

        tracing::debug!("Transforming data...");
        let transformed = self.pipeline.transform(raw_data).await?;

        tracing::debug!("Loading data...");
        let summary = self.pipeline.load(transformed).await?;
        tracing::info!(
            "Wrote {} entries to {}",
            summary.count,
            summary.output_path
        );

        Ok(summary)
    }
}
