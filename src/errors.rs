use thiserror::Error;

/// Surfaced failures: caller error or unreachable preconditions that fail the
/// whole request. Upstream API failures inside the summarization and
/// translation clients are absorbed into fallback values and never appear
/// here.
#[derive(Debug, Error)]
pub enum WebbriefError {
    #[error("Failed to fetch resource: {0}")]
    Fetch(String),

    #[error("Failed to fetch {url}: HTTP {status}")]
    FetchStatus { status: u16, url: String },
}

impl From<reqwest::Error> for WebbriefError {
    fn from(error: reqwest::Error) -> Self {
        WebbriefError::Fetch(error.to_string())
    }
}
