use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::fixtures::models::{Fixture, Phase};

// =============================================================================
// RESPONSE DTOs
// =============================================================================

/// Stored fixture as seen by the view layer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FixtureResponseDto {
    pub id: Uuid,
    pub categorie: String,
    pub equipe1: String,
    pub equipe2: String,
    pub phase: Phase,
    /// Field number, morning fixtures only
    pub terrain: Option<i32>,
    /// Kickoff label, e.g. `10h00`
    pub heure: String,
    pub score1: Option<i32>,
    pub score2: Option<i32>,
    /// Half-time score of `equipe1`, afternoon fixtures only
    #[serde(rename = "miTemps1")]
    pub mi_temps1: Option<i32>,
    /// Half-time score of `equipe2`, afternoon fixtures only
    #[serde(rename = "miTemps2")]
    pub mi_temps2: Option<i32>,
}

impl From<Fixture> for FixtureResponseDto {
    fn from(fixture: Fixture) -> Self {
        Self {
            id: fixture.id,
            categorie: fixture.category,
            equipe1: fixture.team1,
            equipe2: fixture.team2,
            phase: fixture.phase,
            terrain: fixture.field,
            heure: fixture.kickoff,
            score1: fixture.score1,
            score2: fixture.score2,
            mi_temps1: fixture.half_time1,
            mi_temps2: fixture.half_time2,
        }
    }
}

// =============================================================================
// REQUEST DTOs
// =============================================================================

/// Request DTO for writing one fixture
///
/// Without `id` the fixture is matched on its category, phase and pairing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertFixtureDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[validate(regex(
        path = "*crate::shared::validation::CATEGORY_REGEX",
        message = "Category must look like U11"
    ))]
    pub categorie: String,

    #[validate(length(min = 1, max = 64, message = "Team 1 must be 1-64 characters"))]
    pub equipe1: String,

    #[validate(length(min = 1, max = 64, message = "Team 2 must be 1-64 characters"))]
    pub equipe2: String,

    pub phase: Phase,

    #[validate(range(min = 1, max = 2, message = "Field must be 1 or 2"))]
    #[serde(default)]
    pub terrain: Option<i32>,

    #[validate(length(min = 1, message = "Kickoff is required"))]
    pub heure: String,

    #[validate(range(min = 0, message = "Score must not be negative"))]
    #[serde(default)]
    pub score1: Option<i32>,

    #[validate(range(min = 0, message = "Score must not be negative"))]
    #[serde(default)]
    pub score2: Option<i32>,

    #[validate(range(min = 0, message = "Half-time score must not be negative"))]
    #[serde(default, rename = "miTemps1")]
    pub mi_temps1: Option<i32>,

    #[validate(range(min = 0, message = "Half-time score must not be negative"))]
    #[serde(default, rename = "miTemps2")]
    pub mi_temps2: Option<i32>,
}

/// Query params for listing fixtures
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListFixturesQuery {
    /// Only fixtures of this category
    pub categorie: Option<String>,
    /// Only fixtures of this phase (`matin` or `apresmidi`)
    pub phase: Option<Phase>,
}

impl ListFixturesQuery {
    pub fn matches(&self, fixture: &Fixture) -> bool {
        self.categorie
            .as_deref()
            .map_or(true, |category| fixture.category == category)
            && self.phase.map_or(true, |phase| fixture.phase == phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_score() {
        let dto: UpsertFixtureDto = serde_json::from_value(serde_json::json!({
            "categorie": "U11",
            "equipe1": "Forges 1",
            "equipe2": "Forges 2",
            "phase": "matin",
            "terrain": 1,
            "heure": "10h00",
            "score1": -1,
            "score2": 2
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_rejects_non_numeric_score() {
        let parsed = serde_json::from_value::<UpsertFixtureDto>(serde_json::json!({
            "categorie": "U11",
            "equipe1": "Forges 1",
            "equipe2": "Forges 2",
            "phase": "matin",
            "heure": "10h00",
            "score1": "abc"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_rejects_third_field() {
        let dto: UpsertFixtureDto = serde_json::from_value(serde_json::json!({
            "categorie": "U13",
            "equipe1": "Gournay 1",
            "equipe2": "Gournay 2",
            "phase": "morning",
            "terrain": 3,
            "heure": "10h20"
        }))
        .unwrap();
        assert_eq!(dto.phase, Phase::Morning);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_response_uses_stored_field_names() {
        let now = chrono::Utc::now();
        let dto = FixtureResponseDto::from(Fixture {
            id: Uuid::now_v7(),
            category: "U11".to_string(),
            team1: "Forges".to_string(),
            team2: "Foucarmont".to_string(),
            phase: Phase::Afternoon,
            field: None,
            kickoff: "14h00".to_string(),
            score1: None,
            score2: None,
            half_time1: Some(2),
            half_time2: Some(3),
            created_at: now,
            updated_at: now,
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["categorie"], "U11");
        assert_eq!(json["equipe2"], "Foucarmont");
        assert_eq!(json["phase"], "apresmidi");
        assert_eq!(json["heure"], "14h00");
        assert!(json["terrain"].is_null());
        assert_eq!(json["miTemps1"], 2);
        assert_eq!(json["miTemps2"], 3);
    }

    #[test]
    fn test_rejects_negative_half_time_score() {
        let dto: UpsertFixtureDto = serde_json::from_value(serde_json::json!({
            "categorie": "U13",
            "equipe1": "Forges",
            "equipe2": "Gournay",
            "phase": "apresmidi",
            "heure": "15h00",
            "miTemps1": -2
        }))
        .unwrap();
        assert_eq!(dto.mi_temps1, Some(-2));
        assert!(dto.mi_temps2.is_none());
        assert!(dto.validate().is_err());
    }
}
