//! HTTP/JSON-RPC adapter for the web-summarization pipeline.

pub mod envelope;
pub mod handler;

// Re-export the router and state for convenience
pub use handler::{AppState, router};
