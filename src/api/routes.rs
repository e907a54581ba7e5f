use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    let recommendations = Router::new()
        .route(
            "/",
            get(handlers::list_recent).post(handlers::create_recommendation),
        )
        .route("/random", get(handlers::get_random))
        .route("/top/:amount", get(handlers::get_top))
        .route("/:id", get(handlers::get_by_id))
        .route("/:id/upvote", post(handlers::upvote))
        .route("/:id/downvote", post(handlers::downvote));

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/recommendations", recommendations);

    if state.test_routes_enabled {
        router = router.merge(test_routes());
    }

    router
        .layer(
            // Request id must be assigned before the trace span is built
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Routes used by end-to-end suites to reset state between runs
fn test_routes() -> Router<AppState> {
    Router::new().route("/test/reset", post(handlers::reset))
}
