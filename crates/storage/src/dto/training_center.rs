use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingCenterRequest {
    #[schema(example = "CT King")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Name must be between 1 and 20 characters"
    ))]
    pub name: String,

    #[schema(example = "Rua X, Q02")]
    #[validate(length(
        min = 1,
        max = 30,
        message = "Address must be between 1 and 30 characters"
    ))]
    pub address: String,

    #[schema(example = "Marcos")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "Owner must be between 1 and 20 characters"
    ))]
    pub owner: String,
}

/// A training center referenced by its name, as embedded in athlete payloads
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[schema(example = "CT King")]
    #[validate(length(min = 1, max = 20))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            id: center.id,
            name: center.name,
            address: center.address,
            owner: center.owner,
        }
    }
}
