use quotes_crawler::{build_http_client, Crawler, CrawlerError, Fetcher};
use std::fs::File;
use std::time::Duration;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

const BASE_URL: &str = "http://quotes.toscrape.com";
const OUTPUT_PATH: &str = "quotes.json";
const REQUEST_DELAY: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<(), CrawlerError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "debug,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let fetcher = Fetcher::new(build_http_client()?, REQUEST_DELAY);
    let crawler = Crawler::new(fetcher, BASE_URL);

    let quotes = crawler.crawl_all().await?;

    let file = File::create(OUTPUT_PATH)?;
    serde_json::to_writer_pretty(file, &quotes)?;

    info!(
        "Successfully scraped {} quotes and saved to {}",
        quotes.len(),
        OUTPUT_PATH
    );
    Ok(())
}
