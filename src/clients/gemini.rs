//! Gemini summarization client.
//!
//! One `generateContent` call per summary. The client's contract is total:
//! it always returns a string, degrading to a fixed fallback when the
//! upstream response is unusable or the call fails outright.

use serde::Deserialize;
use serde_json::json;
use tracing::error;

/// Returned when the upstream response carried no usable candidate.
pub const NO_SUMMARY_FALLBACK: &str = "No summary generated.";

/// Returned when the call itself failed (transport error, non-2xx, bad JSON).
pub const SUMMARY_ERROR_FALLBACK: &str = "An error occurred while summarizing the text.";

/// Client for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    /// Summarize `text` with a single upstream call.
    ///
    /// Callers truncate the input to a bounded prefix beforehand; this
    /// method sends whatever it is given. On success the first candidate's
    /// text is returned, trimmed. A response without a usable candidate
    /// yields [`NO_SUMMARY_FALLBACK`]; a failed call yields
    /// [`SUMMARY_ERROR_FALLBACK`]. Errors are logged, never propagated.
    pub async fn summarize(&self, text: &str) -> String {
        let body = json!({
            "contents": [
                {
                    "parts": [
                        { "text": format!("Summarize the following text concisely: {}", text) }
                    ]
                }
            ]
        });

        let response = match self.http.post(self.endpoint()).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Summarization request failed: {}", e);
                return SUMMARY_ERROR_FALLBACK.to_string();
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Summarization API returned an error status");
            return SUMMARY_ERROR_FALLBACK.to_string();
        }

        let parsed: GenerateContentResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Failed to decode summarization response: {}", e);
                return SUMMARY_ERROR_FALLBACK.to_string();
            }
        };

        match first_candidate_text(&parsed) {
            Some(summary) => summary,
            None => NO_SUMMARY_FALLBACK.to_string(),
        }
    }
}

/// Pull the first non-empty candidate text out of a decoded response.
fn first_candidate_text(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .as_deref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_deref()?
        .first()?
        .text
        .as_deref()?
        .trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
