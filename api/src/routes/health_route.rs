//! GET /health — liveness probe.

use axum::http::StatusCode;

/// Handler: GET /health
///
/// Plain 200 with no body; no upstream dependency is touched.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
