//! HTTP API route definitions.

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, mc_status, whois, AppState};

/// Static form page served at the root route.
const INDEX_HTML: &str = include_str!("index.html");

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Form page
        .route("/", get(index))
        // Relay endpoints
        .route("/mcstatus", post(mc_status))
        .route("/whois", post(whois))
        // Health endpoint
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the input form page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::lookup::mock::MockLookupClient;
    use crate::notify::mock::MockNotifySink;

    fn test_state() -> AppState {
        let config = Config {
            discord_webhook_url: "https://discord.com/api/webhooks/1/abc".to_string(),
            port: 3000,
            mcstatus_api_url: "https://api.mcsrvstat.us/2".to_string(),
            whois_api_url: "https://who-dat.as93.net".to_string(),
            http_timeout_ms: 8_000,
            rust_log: "info".to_string(),
        };

        AppState::new(
            Arc::new(config),
            Arc::new(MockLookupClient::new()),
            Arc::new(MockNotifySink::new()),
        )
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_serves_form_page() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
