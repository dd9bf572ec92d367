use axum::{
    extract::{RawQuery, State},
    response::Response,
};

use crate::routes;
use crate::state::AppState;
use crate::upstream;

use super::{proxy_json, unavailable_fallback};

/// GET /api/devlogs handler - Proxy the upstream devlogs listing
///
/// All caller query parameters are forwarded to the upstream verbatim. When
/// the upstream fails, answers 200 with an empty listing and an error field.
#[utoipa::path(
    get,
    path = routes::DEVLOGS,
    responses(
        (status = 200, description = "Upstream devlogs listing, or the degraded fallback payload")
    ),
    tag = "devlogs"
)]
pub async fn devlogs_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let fallback = unavailable_fallback(&state, "devlogs");
    proxy_json(&state, upstream::DEVLOGS, query.as_deref(), Some(fallback)).await
}

/// GET /api/devlogs/search handler - Proxy the upstream devlog search
#[utoipa::path(
    get,
    path = routes::DEVLOGS_SEARCH,
    responses(
        (status = 200, description = "Upstream search results, or the degraded fallback payload")
    ),
    tag = "devlogs"
)]
pub async fn devlogs_search_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let fallback = unavailable_fallback(&state, "devlogs");
    proxy_json(&state, upstream::DEVLOGS_SEARCH, query.as_deref(), Some(fallback)).await
}
