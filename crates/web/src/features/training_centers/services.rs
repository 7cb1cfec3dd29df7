use std::sync::Arc;

use storage::{
    dto::{common::PaginationParams, training_center::CreateTrainingCenterRequest},
    models::{EntityKind, NewTrainingCenter, TrainingCenter},
    repository::TrainingCenterRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Clone)]
pub struct TrainingCenterService {
    repo: Arc<dyn TrainingCenterRepository>,
}

impl TrainingCenterService {
    pub fn new(repo: Arc<dyn TrainingCenterRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, request: &CreateTrainingCenterRequest) -> WebResult<TrainingCenter> {
        let center = NewTrainingCenter {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            address: request.address.clone(),
            owner: request.owner.clone(),
        };

        let created = self
            .repo
            .create(&center)
            .await
            .map_err(|e| WebError::for_write(EntityKind::TrainingCenter, e, &request.name))?;

        tracing::info!(id = %created.id, name = %created.name, "Training center created");
        Ok(created)
    }

    pub async fn list(&self, page: &PaginationParams) -> WebResult<(Vec<TrainingCenter>, i64)> {
        let total_items = self.repo.count().await?;
        let centers = self.repo.list(page).await?;
        Ok((centers, total_items))
    }

    pub async fn get(&self, id: Uuid) -> WebResult<TrainingCenter> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| WebError::for_lookup(EntityKind::TrainingCenter, id, e))
    }
}
