use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use webbrief::api::{AppState, router};
use webbrief::clients::GeminiClient;
use webbrief::core::config::AppConfig;
use webbrief::pipeline::WebSummarizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    webbrief::setup_logging();

    // Fail fast on missing configuration rather than degrading later.
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let http = reqwest::Client::new();
    let gemini = GeminiClient::new(
        http.clone(),
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    );
    let web = WebSummarizer::new(http, gemini);

    let app = router(Arc::new(AppState { web }));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "webbrief server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
