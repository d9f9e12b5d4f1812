/// webbrief - a web/text summarization service speaking a JSON-RPC-style protocol.
///
/// The service exposes a single HTTP endpoint, `POST /a2a/web-summarizer`,
/// that accepts a JSON-RPC 2.0 envelope carrying a URL, fetches the page,
/// extracts its readable text, summarizes it with the Gemini API, and
/// returns the summary wrapped in a task-shaped result object.
///
/// # Architecture
///
/// The system is a set of small, linear pipelines:
/// - `extract` strips markup down to whitespace-collapsed plain text
/// - `clients` holds the Gemini summarization and LibreTranslate clients,
///   both of which absorb upstream failures into documented fallback values
/// - `pipeline` composes fetch → extract → summarize (web) and
///   summarize → optional translate (text)
/// - `api` adapts JSON-RPC requests onto the web pipeline
///
/// # Example
///
/// ```no_run
/// use webbrief::clients::GeminiClient;
/// use webbrief::core::config::AppConfig;
/// use webbrief::pipeline::WebSummarizer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     webbrief::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let http = reqwest::Client::new();
///     let gemini = GeminiClient::new(
///         http.clone(),
///         config.gemini_base_url.clone(),
///         config.gemini_api_key.clone(),
///         config.gemini_model.clone(),
///     );
///
///     let summarizer = WebSummarizer::new(http, gemini);
///     let url = url::Url::parse("https://example.com/")?;
///     let result = summarizer.summarize_url(&url).await?;
///     println!("Summary: {}", result.summary);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod extract;
pub mod pipeline;

/// Configure structured logging for the server process.
///
/// Sets up tracing-subscriber with an env-filter layer so verbosity can be
/// controlled through `RUST_LOG`; defaults to `info` when unset. Call once
/// at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
