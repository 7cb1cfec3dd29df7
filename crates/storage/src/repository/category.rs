use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::CategoryRepository;
use crate::conflict::map_write_error;
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{Category, NewCategory};

/// PostgreSQL-backed category repository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, category: &NewCategory) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO category (id, name)
            VALUES ($1, $2)
            RETURNING pk_id, id, name
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(category)
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT pk_id, id, name
            FROM category
            ORDER BY pk_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT pk_id, id, name
            FROM category
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(category)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT pk_id, id, name
            FROM category
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }
}
