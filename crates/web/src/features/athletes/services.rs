use std::sync::Arc;

use chrono::Utc;
use storage::{
    dto::{
        athlete::{CreateAthleteRequest, UpdateAthleteRequest},
        common::PaginationParams,
    },
    models::{Athlete, AthleteChanges, EntityKind, NewAthlete},
    repository::AthleteRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::features::references::{ReferenceKind, ReferenceResolver};

#[derive(Clone)]
pub struct AthleteService {
    repo: Arc<dyn AthleteRepository>,
    references: ReferenceResolver,
}

impl AthleteService {
    pub fn new(repo: Arc<dyn AthleteRepository>, references: ReferenceResolver) -> Self {
        Self { repo, references }
    }

    /// Create an athlete.
    ///
    /// The category and training center are resolved by name first; if
    /// either is missing nothing is written. A duplicate national id is
    /// reported as `AlreadyExists`.
    pub async fn create(&self, request: &CreateAthleteRequest) -> WebResult<Athlete> {
        let category_id = self
            .references
            .resolve(ReferenceKind::Category, &request.category.name)
            .await?;
        let training_center_id = self
            .references
            .resolve(ReferenceKind::TrainingCenter, &request.training_center.name)
            .await?;

        let athlete = NewAthlete {
            id: Uuid::new_v4(),
            created_at: Utc::now().naive_utc(),
            name: request.name.clone(),
            national_id: request.national_id.clone(),
            age: request.age,
            weight: request.weight,
            height: request.height,
            sex: request.sex.clone(),
            category_id,
            training_center_id,
        };

        let created = self
            .repo
            .create(&athlete)
            .await
            .map_err(|e| WebError::for_write(EntityKind::Athlete, e, &request.national_id))?;

        tracing::info!(id = %created.id, "Athlete created");
        Ok(created)
    }

    /// One page of athletes and the total count
    pub async fn list(&self, page: &PaginationParams) -> WebResult<(Vec<Athlete>, i64)> {
        let total_items = self.repo.count().await?;
        let athletes = self.repo.list(page).await?;
        Ok((athletes, total_items))
    }

    pub async fn get(&self, id: Uuid) -> WebResult<Athlete> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| WebError::for_lookup(EntityKind::Athlete, id, e))
    }

    /// Apply a partial update. Concurrent updates are last-write-wins.
    pub async fn update(&self, id: Uuid, request: UpdateAthleteRequest) -> WebResult<Athlete> {
        let changes = AthleteChanges::from(request);

        self.repo
            .update(id, &changes)
            .await
            .map_err(|e| WebError::for_lookup(EntityKind::Athlete, id, e))
    }

    pub async fn delete(&self, id: Uuid) -> WebResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| WebError::for_lookup(EntityKind::Athlete, id, e))?;

        tracing::info!(%id, "Athlete deleted");
        Ok(())
    }
}
