//! Actor identity
//!
//! Workflow operations record who performed them. The session layer in
//! front of this service hands the authenticated identity over in the
//! `x-actor` header; this module is the single place that reads it.

use axum::http::HeaderMap;

use crate::config::ApiConfig;

/// Header carrying the acting user's identity
pub const ACTOR_HEADER: &str = "x-actor";

/// Resolves the acting user for a request
///
/// Falls back to the configured default actor when the header is missing,
/// empty, or not valid UTF-8.
pub fn from_headers(headers: &HeaderMap, config: &ApiConfig) -> String {
    headers
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| config.default_actor.clone())
}
