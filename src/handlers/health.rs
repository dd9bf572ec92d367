use std::collections::HashMap;

use axum::{Json, extract::State};
use chrono::Utc;

use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;

const SERVICE_NAME: &str = "devlog-viewer";

/// GET /health handler - Health check endpoint
///
/// Probes the upstream's own health endpoint (bounded by the configured
/// timeout) and reports "healthy" or "degraded" accordingly. Always answers
/// 200: an unreachable upstream downgrades the reported status, it is never
/// surfaced as an error to the caller.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service health report", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachability = match state.upstream.health_check().await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!("Upstream health probe failed: {}", err);
            "unreachable"
        }
    };

    let status = if reachability == "ok" { "healthy" } else { "degraded" };

    let mut upstream = HashMap::new();
    upstream.insert(state.config.upstream_name.clone(), reachability.to_string());

    Json(HealthResponse {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        upstream,
        timestamp: Utc::now().to_rfc3339(),
    })
}
