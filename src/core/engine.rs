use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one scrape run through its three stages and reports progress.
pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("starting scrape run");

        let records = self.pipeline.extract().await?;
        tracing::info!("collected {} ticket records", records.len());

        let table = self.pipeline.transform(records).await?;
        tracing::info!("inferred {} columns", table.columns.len());

        let output_path = self.pipeline.load(table).await?;
        tracing::info!("output written to {}", output_path);

        Ok(output_path)
    }
}
