use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminSession;
use crate::features::fixtures::dtos::{FixtureResponseDto, ListFixturesQuery, UpsertFixtureDto};
use crate::features::fixtures::services::FixtureService;
use crate::shared::types::MessageResponse;

/// List fixtures
///
/// Polled by the public scoreboard; returns fixtures in creation order.
#[utoipa::path(
    get,
    path = "/api/scores",
    params(ListFixturesQuery),
    responses(
        (status = 200, description = "Stored fixtures", body = Vec<FixtureResponseDto>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "scores"
)]
pub async fn list_fixtures(
    State(service): State<Arc<FixtureService>>,
    Query(query): Query<ListFixturesQuery>,
) -> Result<Json<Vec<FixtureResponseDto>>> {
    let fixtures = service.list(&query).await?;
    Ok(Json(fixtures))
}

/// Create or update one fixture
#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = UpsertFixtureDto,
    responses(
        (status = 200, description = "Stored fixture", body = FixtureResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Fixture not found"),
        (status = 409, description = "Pairing already scheduled")
    ),
    tag = "scores",
    security(("bearer_auth" = []))
)]
pub async fn upsert_fixture(
    _session: AdminSession,
    State(service): State<Arc<FixtureService>>,
    AppJson(dto): AppJson<UpsertFixtureDto>,
) -> Result<Json<FixtureResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fixture = service.upsert(dto).await?;
    Ok(Json(fixture))
}

/// Delete every fixture
#[utoipa::path(
    delete,
    path = "/api/scores",
    responses(
        (status = 200, description = "Fixtures removed", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "scores",
    security(("bearer_auth" = []))
)]
pub async fn clear_fixtures(
    _session: AdminSession,
    State(service): State<Arc<FixtureService>>,
) -> Result<Json<MessageResponse>> {
    let message = service.clear().await?;
    Ok(Json(message))
}

/// Regenerate the whole schedule
///
/// Replaces all stored fixtures, scores included, with the round-robin
/// morning pools and the configured afternoon friendlies.
#[utoipa::path(
    post,
    path = "/api/scores/generate",
    responses(
        (status = 200, description = "Generated fixtures", body = Vec<FixtureResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "scores",
    security(("bearer_auth" = []))
)]
pub async fn generate_fixtures(
    _session: AdminSession,
    State(service): State<Arc<FixtureService>>,
) -> Result<Json<Vec<FixtureResponseDto>>> {
    let fixtures = service.generate().await?;
    Ok(Json(fixtures))
}
