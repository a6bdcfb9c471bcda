//! Route definitions

use super::handlers;
use super::state::AppState;
use anyhow::Result;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create the application router with all routes
///
/// When `server.cors_allow_origin` is set, only that origin may call the API
/// from a browser; otherwise any origin is allowed.
pub fn create_router(state: AppState) -> Result<Router> {
    let allow_origin = match state.settings.server.cors_allow_origin.as_deref() {
        Some(origin) => AllowOrigin::exact(origin.parse::<HeaderValue>()?),
        None => AllowOrigin::any(),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        .layer(cors)
        .with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::network::HttpClient;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router_with(settings: Settings) -> Router {
        let state = AppState::new(settings, HttpClient::new().unwrap());
        create_router(state).unwrap()
    }

    #[tokio::test]
    async fn test_index_returns_welcome() {
        let app = router_with(Settings::default());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Welcome to the AI Assistant API");
    }

    #[tokio::test]
    async fn test_restricted_origin_parses() {
        let mut settings = Settings::default();
        settings.server.cors_allow_origin = Some("http://localhost:3000".to_string());
        let state = AppState::new(settings, HttpClient::new().unwrap());
        assert!(create_router(state).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_origin_rejected() {
        let mut settings = Settings::default();
        settings.server.cors_allow_origin = Some("bad\norigin".to_string());
        let state = AppState::new(settings, HttpClient::new().unwrap());
        assert!(create_router(state).is_err());
    }
}
