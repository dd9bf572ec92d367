use axum::{extract::State, response::Response};

use crate::routes;
use crate::state::AppState;
use crate::upstream;

use super::{proxy_json, unavailable_fallback};

/// GET /api/services handler - Proxy the upstream service status listing
///
/// Caller query parameters are never forwarded for this route.
#[utoipa::path(
    get,
    path = routes::SERVICES,
    responses(
        (status = 200, description = "Upstream services listing, or the degraded fallback payload")
    ),
    tag = "services"
)]
pub async fn services_handler(State(state): State<AppState>) -> Response {
    let fallback = unavailable_fallback(&state, "services");
    proxy_json(&state, upstream::SERVICES, None, Some(fallback)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::UpstreamClient;
    use axum::{
        Json, Router,
        body::Body,
        extract::RawQuery,
        http::{Request, StatusCode},
        routing::get,
    };
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_state(base_url: &str, timeout_secs: u64) -> AppState {
        let config = Config {
            upstream_url: base_url.to_string(),
            upstream_name: "argus".to_string(),
            upstream_api_prefix: "/api".to_string(),
            upstream_timeout_secs: timeout_secs,
            static_dir: "public".into(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        AppState {
            upstream: UpstreamClient::from_config(&config).unwrap(),
            config: Arc::new(config),
        }
    }

    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn proxy_app(state: AppState) -> Router {
        Router::new()
            .route(crate::routes::SERVICES, get(services_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_services_passes_upstream_body_through() {
        let upstream_app = Router::new().route(
            "/api/services",
            get(|| async { Json(json!({"services": [{"name": "argus", "up": true}]})) }),
        );
        let base_url = spawn_upstream(upstream_app).await;
        let app = proxy_app(test_state(&base_url, 5));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json, json!({"services": [{"name": "argus", "up": true}]}));
    }

    #[tokio::test]
    async fn test_services_never_forwards_query_params() {
        let upstream_app = Router::new().route(
            "/api/services",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!({"received": query}))
            }),
        );
        let base_url = spawn_upstream(upstream_app).await;
        let app = proxy_app(test_state(&base_url, 5));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/services?verbose=1&page=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json, json!({"received": null}));
    }

    #[tokio::test]
    async fn test_services_fallback_on_timeout() {
        let upstream_app = Router::new().route(
            "/api/services",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Json(json!({"services": []}))
            }),
        );
        let base_url = spawn_upstream(upstream_app).await;
        let app = proxy_app(test_state(&base_url, 1));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body_json,
            json!({"services": [], "error": "argus unavailable"})
        );
    }

    #[tokio::test]
    async fn test_services_fallback_when_unreachable() {
        let app = proxy_app(test_state("http://127.0.0.1:1", 5));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body_json,
            json!({"services": [], "error": "argus unavailable"})
        );
    }
}
