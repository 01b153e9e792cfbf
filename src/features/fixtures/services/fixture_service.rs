use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::fixtures::dtos::{FixtureResponseDto, ListFixturesQuery, UpsertFixtureDto};
use crate::features::fixtures::models::{FixtureScores, FixtureWrite, NewFixture, Phase};
use crate::features::fixtures::repositories::FixtureRepository;
use crate::features::schedule::{generate_tournament, Kickoff};
use crate::features::tournament::TournamentSettings;
use crate::shared::types::MessageResponse;

/// Service for fixture reads, score entry and schedule generation
pub struct FixtureService {
    repository: Arc<dyn FixtureRepository>,
    settings: Arc<TournamentSettings>,
}

impl FixtureService {
    pub fn new(repository: Arc<dyn FixtureRepository>, settings: Arc<TournamentSettings>) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// List fixtures in creation order, optionally filtered
    pub async fn list(&self, query: &ListFixturesQuery) -> Result<Vec<FixtureResponseDto>> {
        let fixtures = self.repository.list().await?;

        Ok(fixtures
            .into_iter()
            .filter(|f| query.matches(f))
            .map(Into::into)
            .collect())
    }

    /// Write one fixture after checking it against the tournament settings
    pub async fn upsert(&self, dto: UpsertFixtureDto) -> Result<FixtureResponseDto> {
        let write = self.check(dto)?;
        let fixture = self.repository.upsert(write).await?;

        tracing::info!(
            fixture_id = %fixture.id,
            category = %fixture.category,
            "Saved fixture {} vs {} ({:?}-{:?})",
            fixture.team1,
            fixture.team2,
            fixture.score1,
            fixture.score2
        );

        Ok(fixture.into())
    }

    /// Remove every fixture
    pub async fn clear(&self) -> Result<MessageResponse> {
        let removed = self.repository.delete_all().await?;
        tracing::info!("Cleared {} fixtures", removed);

        Ok(MessageResponse::new(format!("Deleted {} fixtures", removed)))
    }

    /// Replace the stored fixtures with a freshly generated schedule
    pub async fn generate(&self) -> Result<Vec<FixtureResponseDto>> {
        let fixtures = generate_tournament(&self.settings).map_err(|e| {
            tracing::error!("Failed to generate schedule: {}", e);
            AppError::Internal("Failed to generate schedule".to_string())
        })?;

        let stored = self.repository.replace_all(fixtures).await?;
        tracing::info!("Generated {} fixtures", stored.len());

        Ok(stored.into_iter().map(Into::into).collect())
    }

    fn check(&self, dto: UpsertFixtureDto) -> Result<FixtureWrite> {
        let team1 = dto.equipe1.trim().to_string();
        let team2 = dto.equipe2.trim().to_string();

        if team1 == team2 {
            return Err(AppError::Validation(format!(
                "A team cannot play itself: '{}'",
                team1
            )));
        }

        let roster = self
            .settings
            .roster(&dto.categorie, dto.phase)
            .ok_or_else(|| AppError::Validation(format!("Unknown category '{}'", dto.categorie)))?;

        let unknown: Vec<String> = [&team1, &team2]
            .into_iter()
            .filter(|team| !roster.contains(*team))
            .map(|team| format!("'{}' is not a {} {} team", team, dto.categorie, dto.phase))
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::Validation(unknown.join("\n")));
        }

        if dto.phase == Phase::Afternoon && dto.terrain.is_some() {
            return Err(AppError::Validation(
                "Afternoon fixtures are not assigned a field".to_string(),
            ));
        }

        let kickoff = Kickoff::parse(&dto.heure).ok_or_else(|| {
            AppError::Validation(format!("Kickoff '{}' must look like 10h00", dto.heure))
        })?;

        let scores = FixtureScores {
            score1: dto.score1,
            score2: dto.score2,
            half_time1: dto.mi_temps1,
            half_time2: dto.mi_temps2,
        };
        check_half_time(dto.phase, &scores)?;

        Ok(FixtureWrite {
            id: dto.id,
            fixture: NewFixture {
                category: dto.categorie,
                team1,
                team2,
                phase: dto.phase,
                field: dto.terrain,
                kickoff: kickoff.label(),
            },
            scores,
        })
    }
}

/// Half-time tallies exist only for friendlies and never exceed the final score
fn check_half_time(phase: Phase, scores: &FixtureScores) -> Result<()> {
    let half_time = [scores.half_time1, scores.half_time2];

    if phase == Phase::Morning && half_time.iter().any(Option::is_some) {
        return Err(AppError::Validation(
            "Half-time scores are only recorded for afternoon fixtures".to_string(),
        ));
    }

    let exceeded = half_time
        .into_iter()
        .zip([scores.score1, scores.score2])
        .any(|pair| matches!(pair, (Some(half), Some(full)) if half > full));
    if exceeded {
        return Err(AppError::Validation(
            "Half-time score cannot exceed the final score".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::repositories::InMemoryFixtureRepository;

    fn service() -> FixtureService {
        FixtureService::new(
            Arc::new(InMemoryFixtureRepository::new()),
            Arc::new(TournamentSettings::default()),
        )
    }

    fn morning(
        team1: &str,
        team2: &str,
        score1: Option<i32>,
        score2: Option<i32>,
    ) -> UpsertFixtureDto {
        UpsertFixtureDto {
            id: None,
            categorie: "U11".to_string(),
            equipe1: team1.to_string(),
            equipe2: team2.to_string(),
            phase: Phase::Morning,
            terrain: Some(1),
            heure: "10h00".to_string(),
            score1,
            score2,
            mi_temps1: None,
            mi_temps2: None,
        }
    }

    fn friendly(
        half_time: (Option<i32>, Option<i32>),
        full: (Option<i32>, Option<i32>),
    ) -> UpsertFixtureDto {
        UpsertFixtureDto {
            id: None,
            categorie: "U11".to_string(),
            equipe1: "Forges".to_string(),
            equipe2: "Foucarmont".to_string(),
            phase: Phase::Afternoon,
            terrain: None,
            heure: "14h00".to_string(),
            score1: full.0,
            score2: full.1,
            mi_temps1: half_time.0,
            mi_temps2: half_time.1,
        }
    }

    #[tokio::test]
    async fn test_generate_replaces_previous_fixtures() {
        let service = service();
        service
            .upsert(morning("Forges 1", "Forges 2", Some(1), Some(0)))
            .await
            .unwrap();

        let generated = service.generate().await.unwrap();
        assert_eq!(generated.len(), 14);
        assert!(generated.iter().all(|f| f.score1.is_none() && f.score2.is_none()));

        let listed = service.list(&ListFixturesQuery::default()).await.unwrap();
        assert_eq!(listed.len(), 14);
    }

    #[tokio::test]
    async fn test_upsert_updates_reversed_pairing() {
        let service = service();
        let first = service
            .upsert(morning("Forges 1", "Foucarmont 1", None, None))
            .await
            .unwrap();
        let second = service
            .upsert(morning("Foucarmont 1", "Forges 1", Some(2), Some(5)))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.equipe1, "Foucarmont 1");
        assert_eq!(second.score2, Some(5));
        assert_eq!(
            service.list(&ListFixturesQuery::default()).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_upsert_rejects_team_playing_itself() {
        let err = service()
            .upsert(morning("Forges 1", "Forges 1", None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upsert_rejects_team_outside_roster() {
        // Full squad names belong to the afternoon list only
        let err = service()
            .upsert(morning("Forges", "Foucarmont", None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_upsert_rejects_unknown_category() {
        let mut dto = morning("Forges 1", "Forges 2", None, None);
        dto.categorie = "U15".to_string();
        assert!(matches!(
            service().upsert(dto).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_upsert_rejects_field_on_afternoon_fixture() {
        let mut dto = friendly((None, None), (None, None));
        dto.terrain = Some(1);
        assert!(matches!(
            service().upsert(dto).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_friendly_keeps_half_time_scores() {
        let service = service();
        let at_break = service
            .upsert(friendly((Some(5), Some(4)), (None, None)))
            .await
            .unwrap();
        assert_eq!(at_break.mi_temps1, Some(5));
        assert_eq!(at_break.score1, None);

        let final_whistle = service
            .upsert(friendly((Some(5), Some(4)), (Some(11), Some(9))))
            .await
            .unwrap();
        assert_eq!(final_whistle.id, at_break.id);
        assert_eq!(final_whistle.mi_temps2, Some(4));
        assert_eq!(final_whistle.score2, Some(9));
    }

    #[tokio::test]
    async fn test_half_time_above_final_score_is_rejected() {
        let err = service()
            .upsert(friendly((Some(6), Some(2)), (Some(5), Some(7))))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_morning_fixture_rejects_half_time_scores() {
        let mut dto = morning("Forges 1", "Forges 2", Some(3), Some(1));
        dto.mi_temps1 = Some(1);
        assert!(matches!(
            service().upsert(dto).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_upsert_rejects_malformed_kickoff() {
        let mut dto = morning("Forges 1", "Forges 2", None, None);
        dto.heure = "10:00".to_string();
        assert!(matches!(
            service().upsert(dto).await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_list_filters_by_category_and_phase() {
        let service = service();
        service.generate().await.unwrap();

        let query = ListFixturesQuery {
            categorie: Some("U13".to_string()),
            phase: Some(Phase::Afternoon),
        };
        let listed = service.list(&query).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].equipe2, "Gournay");
    }

    #[tokio::test]
    async fn test_clear_reports_removed_count() {
        let service = service();
        service.generate().await.unwrap();

        let message = service.clear().await.unwrap();
        assert_eq!(message.message, "Deleted 14 fixtures");
        assert!(service
            .list(&ListFixturesQuery::default())
            .await
            .unwrap()
            .is_empty());
    }
}
