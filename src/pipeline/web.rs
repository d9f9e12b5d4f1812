//! Webpage-summarization pipeline: fetch → extract → truncate → summarize.

use tracing::{debug, info};
use url::Url;

use super::truncate_for_summary;
use crate::clients::GeminiClient;
use crate::core::models::SummaryResult;
use crate::errors::WebbriefError;
use crate::extract::extract_text;

/// Composes the fetch, extraction, and summarization steps into a single
/// callable unit. Only fetch failures surface as errors; summarization
/// failures are absorbed into fallback text by the client's own contract.
#[derive(Debug, Clone)]
pub struct WebSummarizer {
    http: reqwest::Client,
    gemini: GeminiClient,
}

impl WebSummarizer {
    #[must_use]
    pub fn new(http: reqwest::Client, gemini: GeminiClient) -> Self {
        Self { http, gemini }
    }

    /// Fetch `url`, extract its readable text, and summarize it.
    ///
    /// # Errors
    ///
    /// Returns [`WebbriefError::Fetch`] on a transport failure and
    /// [`WebbriefError::FetchStatus`] on a non-2xx response.
    pub async fn summarize_url(&self, url: &Url) -> Result<SummaryResult, WebbriefError> {
        info!(%url, "Summarizing webpage");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WebbriefError::FetchStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        let text = extract_text(&html);
        debug!(chars = text.len(), "Extracted page text");

        let summary = self.gemini.summarize(truncate_for_summary(&text)).await;
        Ok(SummaryResult { summary })
    }
}
