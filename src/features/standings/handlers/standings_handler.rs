use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::standings::dtos::CategoryStandingsDto;
use crate::features::standings::services::StandingsService;

/// List standings of every category
#[utoipa::path(
    get,
    path = "/api/standings",
    responses(
        (status = 200, description = "Morning pool standings per category", body = Vec<CategoryStandingsDto>),
    ),
    tag = "standings"
)]
pub async fn list_standings(
    State(service): State<Arc<StandingsService>>,
) -> Result<Json<Vec<CategoryStandingsDto>>> {
    let standings = service.all().await?;
    Ok(Json(standings))
}

/// Get standings of one category
#[utoipa::path(
    get,
    path = "/api/standings/{categorie}",
    params(
        ("categorie" = String, Path, description = "Category name, e.g. U11")
    ),
    responses(
        (status = 200, description = "Morning pool standings", body = CategoryStandingsDto),
        (status = 404, description = "Category not found")
    ),
    tag = "standings"
)]
pub async fn get_category_standings(
    State(service): State<Arc<StandingsService>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryStandingsDto>> {
    let standings = service.for_category(&category).await?;
    Ok(Json(standings))
}
