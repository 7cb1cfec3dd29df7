use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use storage::{
    Database,
    repository::{
        AthleteRepository, CategoryRepository, PgAthleteRepository, PgCategoryRepository,
        PgTrainingCenterRepository, TrainingCenterRepository,
    },
};
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod openapi;

use features::{
    athletes::{self, AthleteService},
    categories::{self, CategoryService},
    references::ReferenceResolver,
    training_centers::{self, TrainingCenterService},
};
use openapi::ApiDoc;

/// Services shared by every request. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub training_centers: TrainingCenterService,
    pub athletes: AthleteService,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        training_centers: Arc<dyn TrainingCenterRepository>,
        athletes: Arc<dyn AthleteRepository>,
    ) -> Self {
        let references = ReferenceResolver::new(categories.clone(), training_centers.clone());

        Self {
            categories: CategoryService::new(categories),
            training_centers: TrainingCenterService::new(training_centers),
            athletes: AthleteService::new(athletes, references),
        }
    }

    pub fn from_database(db: &Database) -> Self {
        let pool = db.pool().clone();

        Self::new(
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgTrainingCenterRepository::new(pool.clone())),
            Arc::new(PgAthleteRepository::new(pool)),
        )
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .nest("/categories", categories::routes::routes())
        .nest("/training-centers", training_centers::routes::routes())
        .nest("/athletes", athletes::routes::routes())
        .with_state(state);

    // `/api/athletes/` is trimmed to `/api/athletes` before routing. Kept off
    // the Swagger UI, which redirects to its own trailing-slash path.
    Router::new()
        .nest_service("/api", NormalizePath::trim_trailing_slash(api))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
