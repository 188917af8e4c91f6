//! HTTP greeting service with observability.
//!
//! Serves a single mutable greeting: `GET /` reads it and
//! `GET|POST /update/{message}` replaces it. Health and Prometheus
//! endpoints sit alongside, with structured logging via tracing.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use greeting::Greeting;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::ApiError;
use routes::greeting::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::greeting::read))
        .route(
            "/update/{message}",
            get(routes::greeting::update).post(routes::greeting::update),
        )
        .route("/health", get(routes::health::check))
        .with_state(state)
        .merge(metrics_router)
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state seeded with the configured greeting.
pub fn create_default_state(config: &Config) -> Arc<AppState> {
    Arc::new(AppState::new(Greeting::new(config.greeting.as_str())))
}

async fn not_found(uri: Uri) -> ApiError {
    metrics::counter!("http_unmatched_requests_total").increment(1);
    tracing::debug!(%uri, "no route matched");
    ApiError::NotFound(uri.path().to_string())
}
