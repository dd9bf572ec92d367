use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "devlog-viewer API",
        version = "1.0.0",
        description = "Thin reverse proxy for the upstream devlog service, with degraded-mode fallbacks"
    ),
    paths(
        handlers::health::health_handler,
        handlers::devlogs::devlogs_handler,
        handlers::devlogs::devlogs_search_handler,
        handlers::services::services_handler
    ),
    components(schemas(ErrorResponse, HealthResponse)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "devlogs", description = "Proxied devlog listing and search"),
        (name = "services", description = "Proxied service status")
    )
)]
pub struct ApiDoc;
