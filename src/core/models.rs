use serde::{Deserialize, Serialize};

/// Request to summarize a block of text.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    /// Optional target language code for translating the summary
    /// (e.g. "es", "fr", "de").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Request to summarize the content behind a URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebSummarizeRequest {
    pub url: String,
}

/// Request to translate text into a target language; the source language is
/// always auto-detected upstream.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

/// Output of the summarization client and the web pipeline.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

/// Output of the translation client.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_text: String,
}

/// Output of the text-summarization pipeline. `translated_summary` is present
/// exactly when a non-empty target language was supplied.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSummaryResult {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_summary: Option<String>,
}
