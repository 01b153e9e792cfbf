use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::tournament::dtos::TournamentResponseDto;
use crate::features::tournament::TournamentSettings;

/// Get the tournament layout
///
/// Categories with their morning and afternoon squads, the morning timetable
/// and the afternoon friendlies.
#[utoipa::path(
    get,
    path = "/api/tournament",
    responses(
        (status = 200, description = "Tournament layout", body = TournamentResponseDto),
    ),
    tag = "tournament"
)]
pub async fn get_tournament(
    State(settings): State<Arc<TournamentSettings>>,
) -> Json<TournamentResponseDto> {
    Json(TournamentResponseDto::from(settings.as_ref()))
}
