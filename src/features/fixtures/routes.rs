use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::fixtures::handlers;
use crate::features::fixtures::services::FixtureService;

/// Read-only scoreboard routes (no authentication required)
pub fn public_routes(service: Arc<FixtureService>) -> Router {
    Router::new()
        .route("/api/scores", get(handlers::list_fixtures))
        .with_state(service)
}

/// Admin routes, mounted behind `auth_middleware`
pub fn admin_routes(service: Arc<FixtureService>) -> Router {
    Router::new()
        .route(
            "/api/scores",
            post(handlers::upsert_fixture).delete(handlers::clear_fixtures),
        )
        .route("/api/scores/generate", post(handlers::generate_fixtures))
        .with_state(service)
}
