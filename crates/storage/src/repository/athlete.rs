use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::AthleteRepository;
use crate::conflict::map_write_error;
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteChanges, NewAthlete};

// Every read joins the referenced rows so responses can carry their names.
const ATHLETE_COLUMNS: &str = r#"
    a.pk_id, a.id, a.created_at, a.name, a.national_id, a.age, a.weight, a.height, a.sex,
    a.category_id, a.training_center_id,
    c.name AS category_name, t.name AS training_center_name
"#;

const ATHLETE_JOINS: &str = r#"
    JOIN category c ON c.pk_id = a.category_id
    JOIN training_center t ON t.pk_id = a.training_center_id
"#;

/// PostgreSQL-backed athlete repository
#[derive(Clone)]
pub struct PgAthleteRepository {
    pool: PgPool,
}

impl PgAthleteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AthleteRepository for PgAthleteRepository {
    async fn create(&self, athlete: &NewAthlete) -> Result<Athlete> {
        let query = format!(
            r#"
            WITH a AS (
                INSERT INTO athlete (
                    id, created_at, name, national_id, age, weight, height, sex,
                    category_id, training_center_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
            )
            SELECT {ATHLETE_COLUMNS}
            FROM a
            {ATHLETE_JOINS}
            "#
        );

        let athlete = sqlx::query_as::<_, Athlete>(&query)
            .bind(athlete.id)
            .bind(athlete.created_at)
            .bind(&athlete.name)
            .bind(&athlete.national_id)
            .bind(athlete.age)
            .bind(athlete.weight)
            .bind(athlete.height)
            .bind(&athlete.sex)
            .bind(athlete.category_id)
            .bind(athlete.training_center_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(athlete)
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Athlete>> {
        let query = format!(
            r#"
            SELECT {ATHLETE_COLUMNS}
            FROM athlete a
            {ATHLETE_JOINS}
            ORDER BY a.pk_id
            LIMIT $1 OFFSET $2
            "#
        );

        let athletes = sqlx::query_as::<_, Athlete>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(athletes)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM athlete")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let query = format!(
            r#"
            SELECT {ATHLETE_COLUMNS}
            FROM athlete a
            {ATHLETE_JOINS}
            WHERE a.id = $1
            "#
        );

        let athlete = sqlx::query_as::<_, Athlete>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    async fn update(&self, id: Uuid, changes: &AthleteChanges) -> Result<Athlete> {
        // Last write wins: no version column is checked.
        let query = format!(
            r#"
            WITH a AS (
                UPDATE athlete
                SET name = COALESCE($2, name),
                    age = COALESCE($3, age)
                WHERE id = $1
                RETURNING *
            )
            SELECT {ATHLETE_COLUMNS}
            FROM a
            {ATHLETE_JOINS}
            "#
        );

        let athlete = sqlx::query_as::<_, Athlete>(&query)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.age)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athlete WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
