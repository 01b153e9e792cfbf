use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::standings::handlers;
use crate::features::standings::services::StandingsService;

/// Create routes for the standings feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<StandingsService>) -> Router {
    Router::new()
        .route("/api/standings", get(handlers::list_standings))
        .route(
            "/api/standings/{categorie}",
            get(handlers::get_category_standings),
        )
        .with_state(service)
}
