use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::fixtures::models::{Fixture, FixtureWrite, NewFixture};
use crate::features::fixtures::repositories::FixtureRepository;

/// PostgreSQL-backed fixture store
pub struct PgFixtureRepository {
    pool: PgPool,
}

impl PgFixtureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an unplayed fixture
    async fn insert_one(
        conn: &mut PgConnection,
        fixture: &NewFixture,
    ) -> std::result::Result<Fixture, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(
            r#"
            INSERT INTO fixtures (id, categorie, equipe1, equipe2, phase, terrain, heure)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, categorie, equipe1, equipe2, phase, terrain, heure, score1, score2, mi_temps1, mi_temps2, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&fixture.category)
        .bind(&fixture.team1)
        .bind(&fixture.team2)
        .bind(fixture.phase.as_str())
        .bind(fixture.field)
        .bind(&fixture.kickoff)
        .fetch_one(conn)
        .await
    }
}

/// Unique violations surface as conflicts, everything else as a database error
fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::Conflict(format!("{}: pairing already scheduled", context));
        }
    }
    tracing::error!("{}: {:?}", context, e);
    AppError::Database(e)
}

#[async_trait]
impl FixtureRepository for PgFixtureRepository {
    async fn list(&self) -> Result<Vec<Fixture>> {
        sqlx::query_as::<_, Fixture>(
            r#"
            SELECT id, categorie, equipe1, equipe2, phase, terrain, heure, score1, score2, mi_temps1, mi_temps2, created_at, updated_at
            FROM fixtures
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list fixtures: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn upsert(&self, write: FixtureWrite) -> Result<Fixture> {
        let FixtureWrite {
            id,
            fixture,
            scores,
        } = write;

        match id {
            Some(id) => sqlx::query_as::<_, Fixture>(
                r#"
                UPDATE fixtures
                SET categorie = $2, equipe1 = $3, equipe2 = $4, phase = $5, terrain = $6,
                    heure = $7, score1 = $8, score2 = $9, mi_temps1 = $10, mi_temps2 = $11,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, categorie, equipe1, equipe2, phase, terrain, heure, score1, score2, mi_temps1, mi_temps2, created_at, updated_at
                "#,
            )
            .bind(id)
            .bind(&fixture.category)
            .bind(&fixture.team1)
            .bind(&fixture.team2)
            .bind(fixture.phase.as_str())
            .bind(fixture.field)
            .bind(&fixture.kickoff)
            .bind(scores.score1)
            .bind(scores.score2)
            .bind(scores.half_time1)
            .bind(scores.half_time2)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to update fixture"))?
            .ok_or_else(|| AppError::NotFound(format!("Fixture '{}' not found", id))),

            // The conflict target matches the fixtures_pairing_key index, so a
            // write naming the teams in either order lands on the same row.
            None => sqlx::query_as::<_, Fixture>(
                r#"
                INSERT INTO fixtures
                    (id, categorie, equipe1, equipe2, phase, terrain, heure, score1, score2, mi_temps1, mi_temps2)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (categorie, phase, (LEAST(equipe1, equipe2)), (GREATEST(equipe1, equipe2)))
                DO UPDATE SET
                    equipe1 = EXCLUDED.equipe1,
                    equipe2 = EXCLUDED.equipe2,
                    terrain = EXCLUDED.terrain,
                    heure = EXCLUDED.heure,
                    score1 = EXCLUDED.score1,
                    score2 = EXCLUDED.score2,
                    mi_temps1 = EXCLUDED.mi_temps1,
                    mi_temps2 = EXCLUDED.mi_temps2,
                    updated_at = NOW()
                RETURNING id, categorie, equipe1, equipe2, phase, terrain, heure, score1, score2, mi_temps1, mi_temps2, created_at, updated_at
                "#,
            )
            .bind(Uuid::now_v7())
            .bind(&fixture.category)
            .bind(&fixture.team1)
            .bind(&fixture.team2)
            .bind(fixture.phase.as_str())
            .bind(fixture.field)
            .bind(&fixture.kickoff)
            .bind(scores.score1)
            .bind(scores.score2)
            .bind(scores.half_time1)
            .bind(scores.half_time2)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to upsert fixture")),
        }
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM fixtures")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete fixtures: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn replace_all(&self, fixtures: Vec<NewFixture>) -> Result<Vec<Fixture>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM fixtures")
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, "Failed to clear fixtures"))?;

        let mut stored = Vec::with_capacity(fixtures.len());
        for fixture in &fixtures {
            // Dropping `tx` on error rolls the whole batch back.
            let row = Self::insert_one(&mut *tx, fixture)
                .await
                .map_err(|e| map_write_error(e, "Failed to insert generated fixture"))?;
            stored.push(row);
        }

        tx.commit().await?;
        Ok(stored)
    }
}
