use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::category::CategoryRef;
use super::training_center::TrainingCenterRef;

/// Response containing an athlete and the names of the records it references
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category: CategoryRef,
    pub training_center: TrainingCenterRef,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[schema(example = "Joao")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[schema(example = "12345678900")]
    #[validate(length(
        min = 1,
        max = 11,
        message = "National id must be between 1 and 11 characters"
    ))]
    pub national_id: String,

    #[schema(example = 25)]
    pub age: i32,

    #[schema(example = 75.5)]
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: f64,

    #[schema(example = 1.70)]
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: f64,

    #[schema(example = "M")]
    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for partially updating an athlete
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    pub age: Option<i32>,
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            name: athlete.name,
            national_id: athlete.national_id,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: CategoryRef {
                name: athlete.category_name,
            },
            training_center: TrainingCenterRef {
                name: athlete.training_center_name,
            },
        }
    }
}

impl From<UpdateAthleteRequest> for crate::models::AthleteChanges {
    fn from(req: UpdateAthleteRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
        }
    }
}
