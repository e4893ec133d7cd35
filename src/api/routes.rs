use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{request_id_middleware, request_span};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Recommendations
        .route(
            "/recommendations/contextual",
            post(handlers::contextual_recommendations),
        )
        .route("/recommendations", post(handlers::platform_recommendations))
        // Titles
        .route("/search", get(handlers::search))
        .route("/titles/:media_type/:id", get(handlers::title_details))
        .route("/titles/:media_type/:id/similar", get(handlers::similar))
        // Genre catalog
        .route("/genres", get(handlers::genres))
        .route("/genres/invalidate", post(handlers::invalidate_genres))
}
