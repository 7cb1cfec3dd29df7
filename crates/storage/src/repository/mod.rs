//! Repository traits for data access.
//!
//! Services depend on these traits; the PostgreSQL implementations live next
//! to each trait's record type.

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::error::Result;
use crate::models::{
    Athlete, AthleteChanges, Category, NewAthlete, NewCategory, NewTrainingCenter, TrainingCenter,
};

pub mod athlete;
pub mod category;
pub mod training_center;

pub use athlete::PgAthleteRepository;
pub use category::PgCategoryRepository;
pub use training_center::PgTrainingCenterRepository;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a category; a duplicate name fails with `UniqueViolation`
    async fn create(&self, category: &NewCategory) -> Result<Category>;

    /// One page of categories in insertion order
    async fn list(&self, page: &PaginationParams) -> Result<Vec<Category>>;

    async fn count(&self) -> Result<i64>;

    async fn find_by_id(&self, id: Uuid) -> Result<Category>;

    /// Exact-match lookup on the unique name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>>;
}

#[async_trait]
pub trait TrainingCenterRepository: Send + Sync {
    async fn create(&self, center: &NewTrainingCenter) -> Result<TrainingCenter>;

    async fn list(&self, page: &PaginationParams) -> Result<Vec<TrainingCenter>>;

    async fn count(&self) -> Result<i64>;

    async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter>;

    async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>>;
}

#[async_trait]
pub trait AthleteRepository: Send + Sync {
    /// Insert an athlete whose references are already resolved
    async fn create(&self, athlete: &NewAthlete) -> Result<Athlete>;

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Athlete>>;

    async fn count(&self) -> Result<i64>;

    async fn find_by_id(&self, id: Uuid) -> Result<Athlete>;

    /// Apply the present fields of `changes`; `NotFound` if the id is unknown
    async fn update(&self, id: Uuid, changes: &AthleteChanges) -> Result<Athlete>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}
