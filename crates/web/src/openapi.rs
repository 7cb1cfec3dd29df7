use utoipa::OpenApi;

use crate::features::{athletes, categories, training_centers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workout API",
        description = "Athletes, categories and training centers"
    ),
    paths(
        categories::handlers::create_category,
        categories::handlers::list_categories,
        categories::handlers::get_category,
        training_centers::handlers::create_training_center,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        athletes::handlers::create_athlete,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryRef,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterRef,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::common::PaginationMeta,
        )
    ),
    tags(
        (name = "categories", description = "Category endpoints"),
        (name = "training-centers", description = "Training center endpoints"),
        (name = "athletes", description = "Athlete endpoints"),
    )
)]
pub struct ApiDoc;
