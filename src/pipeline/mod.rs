//! Summarization pipelines: fixed sequential compositions of fetch,
//! extraction, and client calls. The call graph is static; there is no
//! runtime tool selection.

pub mod text;
pub mod web;

// Re-export the pipelines for convenience
pub use text::TextSummarizer;
pub use web::WebSummarizer;

/// Maximum number of characters handed to the summarization client.
/// Caps upstream payload size, cost, and latency.
pub const MAX_SUMMARY_INPUT_CHARS: usize = 8000;

/// Truncate `text` to the first [`MAX_SUMMARY_INPUT_CHARS`] characters.
#[must_use]
pub fn truncate_for_summary(text: &str) -> &str {
    match text.char_indices().nth(MAX_SUMMARY_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
