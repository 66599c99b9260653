//! API middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

use crate::actor::ACTOR_HEADER;

/// Request logging middleware
///
/// Logs every API request with the acting user, complementing the audit
/// trail the workflow engine writes per claim.
pub async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let actor = request
        .headers()
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("anonymous")
        .to_string();

    let start = Instant::now();
    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        actor = %actor,
        status = %response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
