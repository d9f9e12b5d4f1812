//! Request handler for `POST /a2a/web-summarizer`.
//!
//! Validates the JSON-RPC envelope, runs the web-summarization pipeline,
//! and maps the outcome into a response envelope. Validation failures map
//! to 400 with a specific error code; a failed fetch or any other internal
//! failure maps to 500 with `-32603` and the message in `error.data.details`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::Value;
use tracing::{error, info};
use url::Url;

use super::envelope::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, error_envelope, result_envelope, task_result,
};
use crate::core::models::WebSummarizeRequest;
use crate::pipeline::WebSummarizer;

/// Shared per-process state. Nothing in here is mutated across requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub web: WebSummarizer,
}

/// Build the service router.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/a2a/web-summarizer", post(web_summarizer_handler))
        .with_state(state)
}

async fn web_summarizer_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    // ========================================================================
    // Parse body
    // ========================================================================

    let body: Value = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to parse request body: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_envelope(
                    &Value::Null,
                    INTERNAL_ERROR,
                    "Internal error",
                    Some(&e.to_string()),
                )),
            );
        }
    };

    // ========================================================================
    // Validate JSON-RPC structure
    // ========================================================================

    let request_id = body.get("id").cloned().filter(|id| !id.is_null());
    let jsonrpc = body.get("jsonrpc").and_then(Value::as_str);

    if jsonrpc != Some("2.0") || request_id.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_envelope(
                &request_id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid Request: jsonrpc must be \"2.0\" and id is required",
                None,
            )),
        );
    }
    let request_id = request_id.unwrap_or(Value::Null);

    // ========================================================================
    // Validate URL parameter
    // ========================================================================

    let request: Option<WebSummarizeRequest> = body
        .get("params")
        .and_then(|params| serde_json::from_value(params.clone()).ok());

    let Some(request) = request else {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_envelope(
                &request_id,
                INVALID_PARAMS,
                "Missing required parameter: url",
                None,
            )),
        );
    };

    let Ok(url) = Url::parse(&request.url) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(error_envelope(
                &request_id,
                INVALID_PARAMS,
                "Invalid URL format",
                None,
            )),
        );
    };

    // ========================================================================
    // Run the pipeline and shape the response
    // ========================================================================

    match state.web.summarize_url(&url).await {
        Ok(result) => {
            info!(%url, "Web summarization completed");
            (
                StatusCode::OK,
                Json(result_envelope(
                    &request_id,
                    task_result(url.as_str(), &result.summary),
                )),
            )
        }
        Err(e) => {
            error!(%url, "Web summarization failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_envelope(
                    &request_id,
                    INTERNAL_ERROR,
                    "Internal error",
                    Some(&e.to_string()),
                )),
            )
        }
    }
}
