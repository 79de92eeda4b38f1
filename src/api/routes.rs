//! API Routes
//!
//! Configures the Axum router with all translation service endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, get_preferences_handler, health_handler, language_translations_handler,
    stats_handler, translate_common_handler, translate_handler, update_preferences_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /translate/:key` - Resolve a label in the `common` section
/// - `GET /translate/:section/:key` - Resolve a label
/// - `GET /translations/:lang` - Every section's labels for one language
/// - `GET /preferences` - Current session language and provider
/// - `PUT /preferences` - Change session language and/or provider
/// - `DELETE /cache` - Drop every cached translation
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/translate/:key", get(translate_common_handler))
        .route("/translate/:section/:key", get(translate_handler))
        .route("/translations/:lang", get(language_translations_handler))
        .route(
            "/preferences",
            get(get_preferences_handler).put(update_preferences_handler),
        )
        .route("/cache", delete(clear_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::from_config(&Config::default()).unwrap();
        create_router(state)
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_translate_endpoint() {
        assert_eq!(status_of("/translate/common/home?lang=en").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_translate_default_section_endpoint() {
        assert_eq!(status_of("/translate/search").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_language_translations_endpoint() {
        assert_eq!(status_of("/translations/id").await, StatusCode::OK);
        assert_eq!(status_of("/translations/fr").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_translate_invalid_timeout() {
        assert_eq!(
            status_of("/translate/common/home?timeout=10").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_translate_unknown_language_rejected() {
        assert_eq!(
            status_of("/translate/common/home?lang=fr").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_clear_cache_endpoint() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/cache")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
