//! LibreTranslate client.
//!
//! Source language is always auto-detected upstream. On any failure the
//! original text is returned unchanged, so a broken translation service can
//! never lose the summary it was asked to translate.

use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::core::models::{TranslateRequest, TranslationResult};

/// Default LibreTranslate endpoint (public instance, no API key required).
pub const DEFAULT_TRANSLATE_URL: &str = "https://libretranslate.de/translate";

/// Client for a LibreTranslate-compatible `/translate` endpoint.
#[derive(Debug, Clone)]
pub struct TranslateClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl TranslateClient {
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// Translate the request text with a single upstream call.
    ///
    /// Returns the translated text on success. On transport error, non-2xx
    /// status, or a response missing the `translatedText` field, the result
    /// carries the original text unchanged and the failure is logged. No
    /// retry.
    pub async fn translate(&self, request: &TranslateRequest) -> TranslationResult {
        let target_lang = request.target_lang.as_str();
        let body = json!({
            "q": request.text,
            "source": "auto",
            "target": target_lang,
            "format": "text",
        });

        let fallback = || TranslationResult {
            translated_text: request.text.clone(),
        };

        let response = match self.http.post(&self.endpoint).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!(target_lang, "Translation request failed: {}", e);
                return fallback();
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(target_lang, status = %status, "Translation API returned an error status");
            return fallback();
        }

        match response.json::<TranslateResponse>().await {
            Ok(TranslateResponse {
                translated_text: Some(translated),
            }) => TranslationResult {
                translated_text: translated,
            },
            Ok(TranslateResponse {
                translated_text: None,
            }) => {
                error!(target_lang, "Translation response missing translatedText");
                fallback()
            }
            Err(e) => {
                error!(target_lang, "Failed to decode translation response: {}", e);
                fallback()
            }
        }
    }
}
