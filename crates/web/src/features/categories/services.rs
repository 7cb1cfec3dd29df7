use std::sync::Arc;

use storage::{
    dto::{category::CreateCategoryRequest, common::PaginationParams},
    models::{Category, EntityKind, NewCategory},
    repository::CategoryRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Create a category; a duplicate name is reported as `AlreadyExists`
    pub async fn create(&self, request: &CreateCategoryRequest) -> WebResult<Category> {
        let category = NewCategory {
            id: Uuid::new_v4(),
            name: request.name.clone(),
        };

        let created = self
            .repo
            .create(&category)
            .await
            .map_err(|e| WebError::for_write(EntityKind::Category, e, &request.name))?;

        tracing::info!(id = %created.id, name = %created.name, "Category created");
        Ok(created)
    }

    /// One page of categories and the total count
    pub async fn list(&self, page: &PaginationParams) -> WebResult<(Vec<Category>, i64)> {
        let total_items = self.repo.count().await?;
        let categories = self.repo.list(page).await?;
        Ok((categories, total_items))
    }

    pub async fn get(&self, id: Uuid) -> WebResult<Category> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| WebError::for_lookup(EntityKind::Category, id, e))
    }
}
