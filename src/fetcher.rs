use crate::error::CrawlerError;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for every request: one fixed timeout covering
/// connect and read. Constructed once and handed to [`Fetcher::new`].
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Fetches one page at a time, sleeping `delay` before every request to keep
/// the request rate against the origin bounded.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(client: Client, delay: Duration) -> Self {
        Self { client, delay }
    }

    /// One GET. Errors on any transport failure and on any non-200 status;
    /// otherwise parses the body into a document.
    pub async fn fetch(&self, url: &str) -> Result<Html, CrawlerError> {
        sleep(self.delay).await;

        debug!("Visit {}", url);
        let res = self.client.get(url).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(CrawlerError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let html = res.text().await?;
        Ok(Html::parse_document(&html))
    }
}
