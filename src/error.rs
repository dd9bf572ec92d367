use std::fmt;
use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response body returned when a proxied route has no fallback payload.
///
/// The `fallback` marker tells the front end it received a degraded response
/// rather than real upstream data.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub fallback: bool,
}

/// Failure classes for upstream calls.
///
/// Network errors, non-2xx statuses, timeouts, and unparseable bodies are all
/// normalized into this one type so every route takes the same
/// fallback-or-502 path.
#[derive(Debug)]
pub enum UpstreamError {
    /// Connection-level failure reaching the upstream
    Network(reqwest::Error),
    /// Upstream answered with a non-success HTTP status
    Status(u16),
    /// Upstream did not answer within the bounded timeout
    Timeout(Duration),
    /// Upstream body was not valid JSON
    Json(reqwest::Error),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Network(err) => write!(f, "upstream request failed: {}", err),
            UpstreamError::Status(code) => write!(f, "upstream returned HTTP {}", code),
            UpstreamError::Timeout(limit) => {
                write!(f, "upstream timed out after {}s", limit.as_secs())
            }
            UpstreamError::Json(err) => write!(f, "upstream returned invalid JSON: {}", err),
        }
    }
}

impl std::error::Error for UpstreamError {}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: "Upstream service unavailable".to_string(),
            detail: self.to_string(),
            fallback: true,
        });

        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}
