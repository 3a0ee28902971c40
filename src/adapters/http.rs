use crate::domain::model::COMPACT_DATE_FORMAT;
use crate::domain::ports::FetchPage;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header;

pub const DEFAULT_BASE_URL: &str = "http://tickets.londontheatre.co.uk";

// Site constants baked into every availability URL: the path segment between
// show id and quantity, and the ticket type selector.
const PERFORMANCE_SEGMENT: &str = "134";
const TICKET_TYPE: &str = "E";

/// reqwest-backed page fetcher. One GET per call, no caching, no retries;
/// non-2xx responses surface as transport errors.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    host_header: Option<String>,
}

impl HttpClient {
    /// `host_header` pins an explicit virtual host on every request, needed
    /// when the site sits behind a shared frontend.
    pub fn new(base_url: impl Into<String>, host_header: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            host_header,
        }
    }

    pub fn availability_url(&self, show_id: &str, date: NaiveDate, quantity: u32) -> String {
        format!(
            "{}/book/availability/{}/{}/{}?bookingDate={}&type={}",
            self.base_url,
            show_id,
            PERFORMANCE_SEGMENT,
            quantity,
            date.format(COMPACT_DATE_FORMAT),
            TICKET_TYPE,
        )
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(host) = &self.host_header {
            request = request.header(header::HOST, host);
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl FetchPage for HttpClient {
    async fn availability_page(
        &self,
        show_id: &str,
        date: NaiveDate,
        quantity: u32,
    ) -> Result<String> {
        self.get_text(&self.availability_url(show_id, date, quantity))
            .await
    }

    async fn listing_page(&self) -> Result<String> {
        self.get_text(&format!("{}/", self.base_url)).await
    }
}
