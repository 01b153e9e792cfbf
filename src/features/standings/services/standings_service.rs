use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::fixtures::models::{Fixture, Phase};
use crate::features::fixtures::repositories::FixtureRepository;
use crate::features::standings::dtos::CategoryStandingsDto;
use crate::features::standings::ranking;
use crate::features::tournament::{CategorySettings, TournamentSettings};

/// Service computing league tables from the stored fixtures
pub struct StandingsService {
    repository: Arc<dyn FixtureRepository>,
    settings: Arc<TournamentSettings>,
}

impl StandingsService {
    pub fn new(repository: Arc<dyn FixtureRepository>, settings: Arc<TournamentSettings>) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Standings of every configured category, in configuration order
    pub async fn all(&self) -> Result<Vec<CategoryStandingsDto>> {
        let fixtures = self.repository.list().await?;

        Ok(self
            .settings
            .categories
            .iter()
            .map(|category| Self::table(category, &fixtures))
            .collect())
    }

    /// Standings of one category
    pub async fn for_category(&self, name: &str) -> Result<CategoryStandingsDto> {
        let category = self
            .settings
            .category(name)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", name)))?;

        let fixtures = self.repository.list().await?;
        Ok(Self::table(category, &fixtures))
    }

    fn table(category: &CategorySettings, fixtures: &[Fixture]) -> CategoryStandingsDto {
        let scoped: Vec<Fixture> = fixtures
            .iter()
            .filter(|f| f.category == category.name && f.phase == Phase::Morning)
            .cloned()
            .collect();

        CategoryStandingsDto::new(
            &category.name,
            ranking::rank(&scoped, &category.morning_teams),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::models::{FixtureScores, FixtureWrite};
    use crate::features::fixtures::repositories::InMemoryFixtureRepository;
    use crate::features::schedule::generate_tournament;

    async fn seeded() -> (Arc<InMemoryFixtureRepository>, StandingsService) {
        let settings = Arc::new(TournamentSettings::default());
        let repository = Arc::new(InMemoryFixtureRepository::new());
        repository
            .replace_all(generate_tournament(&settings).unwrap())
            .await
            .unwrap();

        let service = StandingsService::new(repository.clone(), settings);
        (repository, service)
    }

    async fn score(repo: &InMemoryFixtureRepository, fixture: &Fixture, s1: i32, s2: i32) {
        repo.upsert(FixtureWrite {
            id: Some(fixture.id),
            fixture: crate::features::fixtures::models::NewFixture {
                category: fixture.category.clone(),
                team1: fixture.team1.clone(),
                team2: fixture.team2.clone(),
                phase: fixture.phase,
                field: fixture.field,
                kickoff: fixture.kickoff.clone(),
            },
            scores: FixtureScores {
                score1: Some(s1),
                score2: Some(s2),
                half_time1: None,
                half_time2: None,
            },
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let (_, service) = seeded().await;
        let err = service.for_category("U15").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_categories_are_scored_separately() {
        let (repo, service) = seeded().await;
        let fixtures = repo.list().await.unwrap();

        // First U13 fixture: Forges 1 vs Forges 2
        let u13 = fixtures
            .iter()
            .find(|f| f.category == "U13" && f.phase == Phase::Morning)
            .unwrap();
        score(&repo, u13, 4, 1).await;

        let u11 = service.for_category("U11").await.unwrap();
        assert!(u11.standings.iter().all(|s| s.played == 0));

        let u13 = service.for_category("U13").await.unwrap();
        assert_eq!(u13.standings[0].team, "Forges 1");
        assert_eq!(u13.standings[0].points, 3);
        assert_eq!(u13.standings[0].position, 1);
        assert_eq!(u13.standings.last().unwrap().team, "Gournay 2");
    }

    #[tokio::test]
    async fn test_afternoon_result_is_ignored() {
        let (repo, service) = seeded().await;
        let fixtures = repo.list().await.unwrap();
        let friendly = fixtures
            .iter()
            .find(|f| f.phase == Phase::Afternoon && f.category == "U11")
            .unwrap();
        score(&repo, friendly, 8, 2).await;

        let all = service.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all
            .iter()
            .flat_map(|c| c.standings.iter())
            .all(|s| s.played == 0));
    }
}
