use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::tournament::TournamentSettings;

/// Public view of the tournament layout, used by the view layer to draw tabs and tables
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponseDto {
    pub categories: Vec<CategoryRosterDto>,
    pub morning: MorningPhaseDto,
    pub afternoon: Vec<AfternoonFixtureDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRosterDto {
    pub category: String,
    pub morning_teams: Vec<String>,
    pub afternoon_teams: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MorningPhaseDto {
    pub start: String,
    pub match_minutes: u32,
    pub break_minutes: u32,
    pub fields: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AfternoonFixtureDto {
    pub category: String,
    pub team1: String,
    pub team2: String,
    pub kickoff: String,
}

impl From<&TournamentSettings> for TournamentResponseDto {
    fn from(settings: &TournamentSettings) -> Self {
        Self {
            categories: settings
                .categories
                .iter()
                .map(|c| CategoryRosterDto {
                    category: c.name.clone(),
                    morning_teams: c.morning_teams.clone(),
                    afternoon_teams: c.afternoon_teams.clone(),
                })
                .collect(),
            morning: MorningPhaseDto {
                start: settings.morning.start.clone(),
                match_minutes: settings.morning.match_minutes,
                break_minutes: settings.morning.break_minutes,
                fields: settings.morning.fields,
            },
            afternoon: settings
                .afternoon
                .iter()
                .map(|f| AfternoonFixtureDto {
                    category: f.category.clone(),
                    team1: f.team1.clone(),
                    team2: f.team2.clone(),
                    kickoff: f.kickoff.clone(),
                })
                .collect(),
        }
    }
}
