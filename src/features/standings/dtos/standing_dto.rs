use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::standings::ranking::Standing;

/// League table of one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStandingsDto {
    pub category: String,
    pub standings: Vec<StandingDto>,
}

/// One team's row, `position` starting at 1
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingDto {
    pub position: usize,
    pub team: String,
    pub points: i32,
    pub played: u32,
    pub goal_diff: i32,
}

impl CategoryStandingsDto {
    pub fn new(category: &str, table: Vec<Standing>) -> Self {
        Self {
            category: category.to_string(),
            standings: table
                .into_iter()
                .enumerate()
                .map(|(i, s)| StandingDto {
                    position: i + 1,
                    team: s.team,
                    points: s.points,
                    played: s.played,
                    goal_diff: s.goal_diff,
                })
                .collect(),
        }
    }
}
