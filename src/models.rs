use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
///
/// `upstream` maps the configured upstream name to "ok" or "unreachable".
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub upstream: HashMap<String, String>,
    pub timestamp: String,
}
