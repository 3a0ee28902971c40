use crate::domain::model::{TableData, TicketRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Delivers raw markup from the ticketing site. The rest of the crate never
/// touches the transport directly, so tests substitute canned pages here.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Availability page for one show, date and ticket quantity.
    async fn availability_page(
        &self,
        show_id: &str,
        date: NaiveDate,
        quantity: u32,
    ) -> Result<String>;

    /// The site's root listing page, which carries the show selector.
    async fn listing_page(&self) -> Result<String>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TicketRecord>>;
    async fn transform(&self, records: Vec<TicketRecord>) -> Result<TableData>;
    async fn load(&self, table: TableData) -> Result<String>;
}
