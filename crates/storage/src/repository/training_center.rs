use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::TrainingCenterRepository;
use crate::conflict::map_write_error;
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{NewTrainingCenter, TrainingCenter};

/// PostgreSQL-backed training center repository
#[derive(Clone)]
pub struct PgTrainingCenterRepository {
    pool: PgPool,
}

impl PgTrainingCenterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainingCenterRepository for PgTrainingCenterRepository {
    async fn create(&self, center: &NewTrainingCenter) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_center (id, name, address, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING pk_id, id, name, address, owner
            "#,
        )
        .bind(center.id)
        .bind(&center.name)
        .bind(&center.address)
        .bind(&center.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(center)
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name, address, owner
            FROM training_center
            ORDER BY pk_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(centers)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM training_center")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name, address, owner
            FROM training_center
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(center)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name, address, owner
            FROM training_center
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(center)
    }
}
