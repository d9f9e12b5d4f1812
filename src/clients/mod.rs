//! Remote-API clients for summarization and translation.
//!
//! Both clients are total: upstream failures are absorbed into documented
//! fallback values and logged, never propagated to the caller. Each call is
//! a single attempt with no retry or backoff.

pub mod gemini;
pub mod translate;

// Re-export main types for convenience
pub use gemini::GeminiClient;
pub use translate::TranslateClient;
