use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tournament::handlers;
use crate::features::tournament::TournamentSettings;

/// Create routes for the tournament feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(settings: Arc<TournamentSettings>) -> Router {
    Router::new()
        .route("/api/tournament", get(handlers::get_tournament))
        .with_state(settings)
}
