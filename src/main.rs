mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use upstream::UpstreamClient;

/// Build the application router: API routes first, then the static asset
/// tree with the SPA entry document as the catch-all for client-side routes.
fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let spa = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::DEVLOGS, get(handlers::devlogs_handler))
        .route(routes::DEVLOGS_SEARCH, get(handlers::devlogs_search_handler))
        .route(routes::SERVICES, get(handlers::services_handler))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("devlog-viewer starting");

    let config = Config::from_env()?;
    config.log_startup();

    let upstream = UpstreamClient::from_config(&config)?;
    let state = AppState {
        upstream,
        config: Arc::new(config),
    };

    let addr = format!("{}:{}", state.config.service_host, state.config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Devlog Viewer running on {}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
