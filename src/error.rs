#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("failed to fetch page: {0}")]
    Request(#[from] reqwest::Error),

    #[error("status code error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode quotes: {0}")]
    Encode(#[from] serde_json::Error),
}
