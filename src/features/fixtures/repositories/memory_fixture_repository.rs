use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::fixtures::models::{Fixture, FixtureScores, FixtureWrite, NewFixture};
use crate::features::fixtures::repositories::FixtureRepository;

/// Process-local fixture store, used with `STORAGE_BACKEND=memory` and in tests
#[derive(Default)]
pub struct InMemoryFixtureRepository {
    fixtures: RwLock<Vec<Fixture>>,
}

impl InMemoryFixtureRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_pairing(stored: &Fixture, candidate: &NewFixture) -> bool {
    stored.category == candidate.category
        && stored.phase == candidate.phase
        && stored.is_pairing(&candidate.team1, &candidate.team2)
}

fn apply(target: &mut Fixture, fixture: NewFixture, scores: FixtureScores) {
    target.category = fixture.category;
    target.team1 = fixture.team1;
    target.team2 = fixture.team2;
    target.phase = fixture.phase;
    target.field = fixture.field;
    target.kickoff = fixture.kickoff;
    target.score1 = scores.score1;
    target.score2 = scores.score2;
    target.half_time1 = scores.half_time1;
    target.half_time2 = scores.half_time2;
    target.updated_at = Utc::now();
}

fn materialize(fixture: NewFixture, scores: FixtureScores) -> Fixture {
    let now = Utc::now();
    Fixture {
        id: Uuid::now_v7(),
        category: fixture.category,
        team1: fixture.team1,
        team2: fixture.team2,
        phase: fixture.phase,
        field: fixture.field,
        kickoff: fixture.kickoff,
        score1: scores.score1,
        score2: scores.score2,
        half_time1: scores.half_time1,
        half_time2: scores.half_time2,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl FixtureRepository for InMemoryFixtureRepository {
    async fn list(&self) -> Result<Vec<Fixture>> {
        Ok(self.fixtures.read().await.clone())
    }

    async fn upsert(&self, write: FixtureWrite) -> Result<Fixture> {
        let FixtureWrite {
            id,
            fixture,
            scores,
        } = write;
        let mut fixtures = self.fixtures.write().await;

        let existing = fixtures.iter().position(|f| same_pairing(f, &fixture));

        let index = match id {
            Some(id) => {
                let index = fixtures
                    .iter()
                    .position(|f| f.id == id)
                    .ok_or_else(|| AppError::NotFound(format!("Fixture '{}' not found", id)))?;
                if existing.is_some_and(|other| other != index) {
                    return Err(AppError::Conflict(
                        "Failed to update fixture: pairing already scheduled".to_string(),
                    ));
                }
                index
            }
            None => match existing {
                Some(index) => index,
                None => {
                    fixtures.push(materialize(fixture, scores));
                    return Ok(fixtures[fixtures.len() - 1].clone());
                }
            },
        };

        apply(&mut fixtures[index], fixture, scores);
        Ok(fixtures[index].clone())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut fixtures = self.fixtures.write().await;
        let removed = fixtures.len() as u64;
        fixtures.clear();
        Ok(removed)
    }

    async fn replace_all(&self, fixtures: Vec<NewFixture>) -> Result<Vec<Fixture>> {
        // Build the replacement set first so a rejected batch changes nothing.
        let mut replacement: Vec<Fixture> = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            if replacement.iter().any(|f| same_pairing(f, &fixture)) {
                return Err(AppError::Conflict(format!(
                    "Failed to insert generated fixture: {} vs {} already scheduled",
                    fixture.team1, fixture.team2
                )));
            }
            replacement.push(materialize(fixture, FixtureScores::default()));
        }

        let mut stored = self.fixtures.write().await;
        *stored = replacement;
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures::models::Phase;

    fn new_fixture(team1: &str, team2: &str) -> NewFixture {
        NewFixture {
            category: "U11".to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            phase: Phase::Morning,
            field: Some(1),
            kickoff: "10h00".to_string(),
        }
    }

    fn write(
        id: Option<Uuid>,
        team1: &str,
        team2: &str,
        scores: (Option<i32>, Option<i32>),
    ) -> FixtureWrite {
        FixtureWrite {
            id,
            fixture: new_fixture(team1, team2),
            scores: FixtureScores {
                score1: scores.0,
                score2: scores.1,
                ..FixtureScores::default()
            },
        }
    }

    #[tokio::test]
    async fn test_delete_all_then_list_is_empty() {
        let repo = InMemoryFixtureRepository::new();
        repo.replace_all(vec![new_fixture("A", "B"), new_fixture("A", "C")])
            .await
            .unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_without_id_reuses_pairing_in_either_order() {
        let repo = InMemoryFixtureRepository::new();
        let first = repo
            .upsert(write(None, "A", "B", (None, None)))
            .await
            .unwrap();

        let second = repo
            .upsert(write(None, "B", "A", (Some(4), Some(2))))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.team1, "B");
        assert_eq!(second.result(), Some((4, 2)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_with_unknown_id_is_not_found() {
        let repo = InMemoryFixtureRepository::new();
        let err = repo
            .upsert(write(Some(Uuid::now_v7()), "A", "B", (None, None)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upsert_by_id_cannot_take_another_pairing() {
        let repo = InMemoryFixtureRepository::new();
        let stored = repo
            .replace_all(vec![new_fixture("A", "B"), new_fixture("A", "C")])
            .await
            .unwrap();

        let err = repo
            .upsert(write(Some(stored[1].id), "B", "A", (None, None)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_failed_replace_keeps_previous_fixtures() {
        let repo = InMemoryFixtureRepository::new();
        let before = repo
            .replace_all(vec![new_fixture("A", "B")])
            .await
            .unwrap();

        let err = repo
            .replace_all(vec![new_fixture("C", "D"), new_fixture("D", "C")])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryFixtureRepository::new();
        repo.replace_all(vec![
            new_fixture("A", "B"),
            new_fixture("C", "D"),
            new_fixture("A", "C"),
        ])
        .await
        .unwrap();

        let pairs: Vec<(String, String)> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| (f.team1, f.team2))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "B".to_string()),
                ("C".to_string(), "D".to_string()),
                ("A".to_string(), "C".to_string()),
            ]
        );
    }
}
