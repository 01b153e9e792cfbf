use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::fixtures::{dtos as fixtures_dtos, handlers as fixtures_handlers, models};
use crate::features::standings::{dtos as standings_dtos, handlers as standings_handlers};
use crate::features::tournament::{dtos as tournament_dtos, handlers as tournament_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        // Scores
        fixtures_handlers::list_fixtures,
        fixtures_handlers::upsert_fixture,
        fixtures_handlers::clear_fixtures,
        fixtures_handlers::generate_fixtures,
        // Standings (public)
        standings_handlers::list_standings,
        standings_handlers::get_category_standings,
        // Tournament (public)
        tournament_handlers::get_tournament,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            // Auth
            auth_dtos::LoginRequestDto,
            auth_dtos::LoginResponseDto,
            // Scores
            models::Phase,
            fixtures_dtos::FixtureResponseDto,
            fixtures_dtos::UpsertFixtureDto,
            // Standings
            standings_dtos::CategoryStandingsDto,
            standings_dtos::StandingDto,
            // Tournament
            tournament_dtos::TournamentResponseDto,
            tournament_dtos::CategoryRosterDto,
            tournament_dtos::MorningPhaseDto,
            tournament_dtos::AfternoonFixtureDto,
        )
    ),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "scores", description = "Fixtures and score entry"),
        (name = "standings", description = "Morning pool league tables (public)"),
        (name = "tournament", description = "Categories, rosters and timetable (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Handball Scoreboard API",
        version = "0.1.0",
        description = "Live scoreboard of a youth handball tournament",
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
