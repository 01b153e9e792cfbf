use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::middleware;
use crate::features::auth::{routes as auth_routes, TokenService};
use crate::features::fixtures::{routes as fixtures_routes, FixtureRepository, FixtureService};
use crate::features::standings::{routes as standings_routes, StandingsService};
use crate::features::tournament::{routes as tournament_routes, TournamentSettings};

/// Services shared by every request
#[derive(Clone)]
pub struct AppServices {
    pub settings: Arc<TournamentSettings>,
    pub tokens: Arc<TokenService>,
    pub fixtures: Arc<FixtureService>,
    pub standings: Arc<StandingsService>,
}

impl AppServices {
    pub fn new(
        settings: TournamentSettings,
        repository: Arc<dyn FixtureRepository>,
        tokens: TokenService,
    ) -> Self {
        let settings = Arc::new(settings);
        Self {
            fixtures: Arc::new(FixtureService::new(
                Arc::clone(&repository),
                Arc::clone(&settings),
            )),
            standings: Arc::new(StandingsService::new(repository, Arc::clone(&settings))),
            tokens: Arc::new(tokens),
            settings,
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes without the HTTP layers added in `main`
pub fn router(services: &AppServices) -> Router {
    // Protected routes (require an admin token)
    let protected_routes = Router::new()
        .merge(fixtures_routes::admin_routes(Arc::clone(&services.fixtures)))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&services.tokens),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(Arc::clone(&services.tokens)))
        .merge(fixtures_routes::public_routes(Arc::clone(&services.fixtures)))
        .merge(standings_routes::routes(Arc::clone(&services.standings)))
        .merge(tournament_routes::routes(Arc::clone(&services.settings)));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .route("/health", get(health_check))
}
