use tracing::info;

pub mod error;
pub mod extract;
pub mod fetcher;
pub mod quote;

pub use error::CrawlerError;
pub use extract::QuoteScraper;
pub use fetcher::{build_http_client, Fetcher};
pub use quote::Quote;

/// Drives the crawl: fetch a page, extract its quotes, follow the
/// pagination next-link, repeat until a page has no next-link.
///
/// Strictly sequential and fail-fast: the first transport, status, or parse
/// problem aborts the whole crawl and no partial result is returned. A page
/// graph whose next-links form a cycle never terminates; the target's
/// pagination is a finite chain.
pub struct Crawler {
    fetcher: Fetcher,
    scraper: QuoteScraper,
    base_url: String,
}

impl Crawler {
    /// `base_url` is both the seed URL and the origin that relative
    /// next-link hrefs are resolved against.
    pub fn new(fetcher: Fetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            scraper: QuoteScraper,
            base_url: base_url.into(),
        }
    }

    /// All quotes from all pages, in page order then document order.
    ///
    /// Each page is fetched and parsed exactly once; the same document
    /// serves both quote extraction and next-link discovery.
    pub async fn crawl_all(&self) -> Result<Vec<Quote>, CrawlerError> {
        let mut quotes = Vec::new();
        let mut current = self.base_url.clone();

        loop {
            let (page_quotes, next) = {
                let doc = self.fetcher.fetch(&current).await?;
                (self.scraper.extract(&doc), self.scraper.next_page_href(&doc))
            };

            info!("Extracted {} quotes from {}", page_quotes.len(), current);
            quotes.extend(page_quotes);

            match next {
                // The next-link href is a root-relative path.
                Some(href) => current = format!("{}{}", self.base_url, href),
                None => break,
            }
        }

        Ok(quotes)
    }
}
