use serde::Serialize;

/// One scraped quote. Field order here is the field order in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}
