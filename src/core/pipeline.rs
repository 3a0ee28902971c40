use crate::core::bot::Bot;
use crate::core::export;
use crate::domain::model::{ScrapeRequest, TableData, TicketRecord};
use crate::domain::ports::{ConfigProvider, FetchPage, Pipeline, Storage};
use crate::utils::error::Result;

/// Wires the orchestrator, exporter and storage into one run: extract walks
/// the date window, transform renders the table, load writes the destination
/// file.
pub struct ScrapePipeline<F: FetchPage, S: Storage, C: ConfigProvider> {
    fetcher: F,
    storage: S,
    config: C,
    request: ScrapeRequest,
}

impl<F: FetchPage, S: Storage, C: ConfigProvider> ScrapePipeline<F, S, C> {
    pub fn new(fetcher: F, storage: S, config: C, request: ScrapeRequest) -> Self {
        Self {
            fetcher,
            storage,
            config,
            request,
        }
    }
}

#[async_trait::async_trait]
impl<F: FetchPage, S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<F, S, C> {
    async fn extract(&self) -> Result<Vec<TicketRecord>> {
        Bot::new(&self.fetcher, &self.request).collect().await
    }

    async fn transform(&self, records: Vec<TicketRecord>) -> Result<TableData> {
        let columns = export::infer_columns(&records);
        let csv = export::render_csv(&columns, &records)?;
        Ok(TableData {
            columns,
            csv,
            records,
        })
    }

    async fn load(&self, table: TableData) -> Result<String> {
        let destination = self.config.output_path();
        tracing::debug!("writing {} bytes to {}", table.csv.len(), destination);
        self.storage
            .write_file(destination, table.csv.as_bytes())
            .await?;
        Ok(destination.to_string())
    }
}
