//! Core configuration and request-scoped value types

pub mod config;
pub mod models;
