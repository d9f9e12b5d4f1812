//! Text-summarization pipeline: summarize, then optionally translate the
//! summary. A direct two-step composition; the translation step runs exactly
//! when a non-empty target language is supplied.

use tracing::info;

use super::truncate_for_summary;
use crate::clients::{GeminiClient, TranslateClient};
use crate::core::models::{SummarizeRequest, TextSummaryResult, TranslateRequest};

#[derive(Debug, Clone)]
pub struct TextSummarizer {
    gemini: GeminiClient,
    translator: TranslateClient,
}

impl TextSummarizer {
    #[must_use]
    pub fn new(gemini: GeminiClient, translator: TranslateClient) -> Self {
        Self { gemini, translator }
    }

    /// Summarize the request text, translating the summary when a target
    /// language is given. `translated_summary` is `Some` iff `language` was
    /// supplied and non-empty. Both client calls are total, so this pipeline
    /// never fails.
    pub async fn run(&self, request: &SummarizeRequest) -> TextSummaryResult {
        let summary = self
            .gemini
            .summarize(truncate_for_summary(&request.text))
            .await;

        let language = request
            .language
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty());

        let translated_summary = match language {
            Some(lang) => {
                info!(target_lang = lang, "Translating summary");
                let translated = self
                    .translator
                    .translate(&TranslateRequest {
                        text: summary.clone(),
                        target_lang: lang.to_string(),
                    })
                    .await;
                Some(translated.translated_text)
            }
            None => None,
        };

        TextSummaryResult {
            summary,
            translated_summary,
        }
    }
}
