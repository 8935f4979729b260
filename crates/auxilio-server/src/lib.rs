//! `Auxilio` Server library.
//!
//! REST API exposing the first-aid recommender. The binary in `main.rs` adds
//! CORS, request tracing and the listener on top of [`build_router`].

#![warn(missing_docs)]

use std::sync::Arc;

use auxilio_core::Recommender;
use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

pub mod handlers;
pub mod metrics;
pub mod types;

pub use handlers::{health_check, list_categories, prometheus_metrics, recommend};
pub use metrics::ServerMetrics;
pub use types::{
    CategoriesResponse, ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse,
    UNKNOWN_CATEGORY_MESSAGE,
};

/// Shared state for all handlers. Immutable apart from atomic counters.
pub struct AppState {
    /// Recommender fitted once at startup.
    pub recommender: Recommender,
    /// Request counters.
    pub metrics: ServerMetrics,
}

impl AppState {
    /// Wraps `recommender` with fresh counters.
    #[must_use]
    pub fn new(recommender: Recommender) -> Self {
        let metrics = ServerMetrics::new(recommender.catalogue());
        Self {
            recommender,
            metrics,
        }
    }
}

/// OpenAPI documentation for the Auxilio REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auxilio API",
        description = "First-aid recommendations by nearest-neighbour matching over a fixed injury catalogue."
    ),
    paths(
        handlers::health::health_check,
        handlers::recommend::recommend,
        handlers::categories::list_categories,
        handlers::metrics::prometheus_metrics,
    ),
    components(schemas(
        RecommendRequest,
        RecommendResponse,
        CategoriesResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "recommend", description = "First-aid recommendations"),
        (name = "metrics", description = "Prometheus metrics"),
    )
)]
pub struct ApiDoc;

/// Build the API router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/recommend", post(recommend))
        .route("/categories", get(list_categories));

    #[cfg(feature = "prometheus")]
    let router = router.route("/metrics", get(prometheus_metrics));

    router.with_state(state)
}
