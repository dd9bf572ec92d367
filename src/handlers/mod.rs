pub mod devlogs;
pub mod health;
pub mod services;

pub use devlogs::{devlogs_handler, devlogs_search_handler};
pub use health::health_handler;
pub use services::services_handler;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value as JsonValue, json};

use crate::state::AppState;

/// Proxy a GET to the upstream and shape the outcome.
///
/// Success passes the upstream JSON body through unchanged. On any upstream
/// failure the route's fallback payload (when supplied) masks the failure with
/// a 200 so the front end keeps working in degraded mode; without a fallback
/// the failure surfaces as a 502 with structured detail. Failures are logged
/// here, independent of which response is built.
pub(crate) async fn proxy_json(
    state: &AppState,
    endpoint: &str,
    query: Option<&str>,
    fallback: Option<JsonValue>,
) -> Response {
    match state.upstream.fetch_json(endpoint, query).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            tracing::warn!("Proxy request to {} failed: {}", endpoint, err);

            match fallback {
                Some(body) => (StatusCode::OK, Json(body)).into_response(),
                None => err.into_response(),
            }
        }
    }
}

/// Fallback payload shape shared by the proxied routes: an empty list under
/// `list_field` plus an error naming the configured upstream, matching the
/// shape of a successful upstream response.
pub(crate) fn unavailable_fallback(state: &AppState, list_field: &str) -> JsonValue {
    json!({
        list_field: [],
        "error": format!("{} unavailable", state.config.upstream_name),
    })
}
