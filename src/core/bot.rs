use crate::core::parser;
use crate::domain::model::{field, ScrapeRequest, TicketRecord, COMPACT_DATE_FORMAT};
use crate::domain::ports::FetchPage;
use crate::utils::error::Result;

/// Scrape orchestrator. Owns one run's request and walks its date window,
/// strictly one date at a time.
pub struct Bot<'a, F: FetchPage> {
    fetcher: &'a F,
    request: &'a ScrapeRequest,
}

impl<'a, F: FetchPage> Bot<'a, F> {
    pub fn new(fetcher: &'a F, request: &'a ScrapeRequest) -> Self {
        Self { fetcher, request }
    }

    /// Fetches and parses every date in the window, tags each row with its
    /// `date` and `showId`, and returns the concatenated rows. The first
    /// transport or parse error aborts the whole run.
    pub async fn collect(&self) -> Result<Vec<TicketRecord>> {
        let mut tickets = Vec::new();

        for date in self.request.window.days() {
            let date_argument = date.format(COMPACT_DATE_FORMAT).to_string();
            tracing::info!("processing date {}", date_argument);

            let page = self
                .fetcher
                .availability_page(&self.request.show_id, date, self.request.quantity)
                .await?;
            let rows = parser::parse_availability(&page)?;
            tracing::debug!("{} ticket rows for {}", rows.len(), date_argument);

            for mut row in rows {
                row.set(field::DATE, date_argument.clone());
                row.set(field::SHOW_ID, self.request.show_id.clone());
                tickets.push(row);
            }
        }

        Ok(tickets)
    }
}
