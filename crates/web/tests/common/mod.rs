// In-memory repositories and request helpers for driving the router in tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use storage::{
    dto::common::PaginationParams,
    error::{Result, StorageError},
    models::{
        Athlete, AthleteChanges, Category, NewAthlete, NewCategory, NewTrainingCenter,
        TrainingCenter,
    },
    repository::{AthleteRepository, CategoryRepository, TrainingCenterRepository},
};
use tower::ServiceExt;
use uuid::Uuid;
use workout_api::{AppState, app};

#[derive(Default)]
struct Tables {
    next_pk: i32,
    categories: Vec<Category>,
    training_centers: Vec<TrainingCenter>,
    athletes: Vec<Athlete>,
}

impl Tables {
    fn next_pk(&mut self) -> i32 {
        self.next_pk += 1;
        self.next_pk
    }
}

/// One store backing all three repositories, enforcing the same unique
/// constraints as the migrations.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn page_of<T: Clone>(rows: &[T], page: &PaginationParams) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    rows.iter()
        .skip(offset)
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

impl MemoryStore {
    pub fn athlete_count(&self) -> usize {
        self.tables.lock().unwrap().athletes.len()
    }

    pub fn category_count(&self) -> usize {
        self.tables.lock().unwrap().categories.len()
    }

    pub fn training_center_count(&self) -> usize {
        self.tables.lock().unwrap().training_centers.len()
    }

    pub fn category_pk(&self, name: &str) -> Option<i32> {
        let tables = self.tables.lock().unwrap();
        tables
            .categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.pk_id)
    }

    pub fn training_center_pk(&self, name: &str) -> Option<i32> {
        let tables = self.tables.lock().unwrap();
        tables
            .training_centers
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.pk_id)
    }

    pub fn athlete(&self, id: Uuid) -> Option<Athlete> {
        let tables = self.tables.lock().unwrap();
        tables.athletes.iter().find(|a| a.id == id).cloned()
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn create(&self, category: &NewCategory) -> Result<Category> {
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.name == category.name) {
            // Mirrors a backend that names the constraint but not the value.
            return Err(StorageError::UniqueViolation {
                field: "name".to_string(),
                value: None,
            });
        }

        let row = Category {
            pk_id: tables.next_pk(),
            id: category.id,
            name: category.name.clone(),
        };
        tables.categories.push(row.clone());
        Ok(row)
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Category>> {
        Ok(page_of(&self.tables.lock().unwrap().categories, page))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.tables.lock().unwrap().categories.len() as i64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        let tables = self.tables.lock().unwrap();
        tables
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.name == name).cloned())
    }
}

#[async_trait]
impl TrainingCenterRepository for MemoryStore {
    async fn create(&self, center: &NewTrainingCenter) -> Result<TrainingCenter> {
        let mut tables = self.tables.lock().unwrap();
        if tables.training_centers.iter().any(|t| t.name == center.name) {
            return Err(StorageError::UniqueViolation {
                field: "name".to_string(),
                value: Some(center.name.clone()),
            });
        }

        let row = TrainingCenter {
            pk_id: tables.next_pk(),
            id: center.id,
            name: center.name.clone(),
            address: center.address.clone(),
            owner: center.owner.clone(),
        };
        tables.training_centers.push(row.clone());
        Ok(row)
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<TrainingCenter>> {
        Ok(page_of(&self.tables.lock().unwrap().training_centers, page))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.tables.lock().unwrap().training_centers.len() as i64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        let tables = self.tables.lock().unwrap();
        tables
            .training_centers
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .training_centers
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }
}

#[async_trait]
impl AthleteRepository for MemoryStore {
    async fn create(&self, athlete: &NewAthlete) -> Result<Athlete> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .athletes
            .iter()
            .any(|a| a.national_id == athlete.national_id)
        {
            return Err(StorageError::UniqueViolation {
                field: "national_id".to_string(),
                value: Some(athlete.national_id.clone()),
            });
        }

        let category_name = tables
            .categories
            .iter()
            .find(|c| c.pk_id == athlete.category_id)
            .map(|c| c.name.clone());
        let training_center_name = tables
            .training_centers
            .iter()
            .find(|t| t.pk_id == athlete.training_center_id)
            .map(|t| t.name.clone());

        let (Some(category_name), Some(training_center_name)) =
            (category_name, training_center_name)
        else {
            return Err(StorageError::ConstraintViolation(
                "Referenced record no longer exists".to_string(),
            ));
        };

        let row = Athlete {
            pk_id: tables.next_pk(),
            id: athlete.id,
            created_at: athlete.created_at,
            name: athlete.name.clone(),
            national_id: athlete.national_id.clone(),
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex.clone(),
            category_id: athlete.category_id,
            training_center_id: athlete.training_center_id,
            category_name,
            training_center_name,
        };
        tables.athletes.push(row.clone());
        Ok(row)
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Athlete>> {
        Ok(page_of(&self.tables.lock().unwrap().athletes, page))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.tables.lock().unwrap().athletes.len() as i64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        self.athlete(id).ok_or(StorageError::NotFound)
    }

    async fn update(&self, id: Uuid, changes: &AthleteChanges) -> Result<Athlete> {
        let mut tables = self.tables.lock().unwrap();
        let athlete = tables
            .athletes
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StorageError::NotFound)?;

        if let Some(name) = &changes.name {
            athlete.name = name.clone();
        }
        if let Some(age) = changes.age {
            athlete.age = age;
        }

        Ok(athlete.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.athletes.len();
        tables.athletes.retain(|a| a.id != id);

        if tables.athletes.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

/// Failure every write through a [`FailingWrites`] store reports.
#[derive(Debug, Clone, Copy)]
pub enum WriteFault {
    /// A constraint other than a unique key rejected the row.
    Integrity,
    /// The backend was unreachable.
    Timeout,
}

impl WriteFault {
    fn error(self) -> StorageError {
        match self {
            Self::Integrity => StorageError::ConstraintViolation(
                "new row violates check constraint \"athlete_age_check\"".to_string(),
            ),
            Self::Timeout => StorageError::Database(sqlx::Error::PoolTimedOut),
        }
    }
}

/// Reads go to the wrapped store. Every create fails with `fault`.
pub struct FailingWrites {
    inner: Arc<MemoryStore>,
    fault: WriteFault,
}

#[async_trait]
impl CategoryRepository for FailingWrites {
    async fn create(&self, _category: &NewCategory) -> Result<Category> {
        Err(self.fault.error())
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Category>> {
        CategoryRepository::list(&*self.inner, page).await
    }

    async fn count(&self) -> Result<i64> {
        CategoryRepository::count(&*self.inner).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        CategoryRepository::find_by_id(&*self.inner, id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        CategoryRepository::find_by_name(&*self.inner, name).await
    }
}

#[async_trait]
impl TrainingCenterRepository for FailingWrites {
    async fn create(&self, _center: &NewTrainingCenter) -> Result<TrainingCenter> {
        Err(self.fault.error())
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<TrainingCenter>> {
        TrainingCenterRepository::list(&*self.inner, page).await
    }

    async fn count(&self) -> Result<i64> {
        TrainingCenterRepository::count(&*self.inner).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        TrainingCenterRepository::find_by_id(&*self.inner, id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::find_by_name(&*self.inner, name).await
    }
}

#[async_trait]
impl AthleteRepository for FailingWrites {
    async fn create(&self, _athlete: &NewAthlete) -> Result<Athlete> {
        Err(self.fault.error())
    }

    async fn list(&self, page: &PaginationParams) -> Result<Vec<Athlete>> {
        AthleteRepository::list(&*self.inner, page).await
    }

    async fn count(&self) -> Result<i64> {
        AthleteRepository::count(&*self.inner).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        AthleteRepository::find_by_id(&*self.inner, id).await
    }

    async fn update(&self, id: Uuid, changes: &AthleteChanges) -> Result<Athlete> {
        AthleteRepository::update(&*self.inner, id, changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        AthleteRepository::delete(&*self.inner, id).await
    }
}

/// An app whose creates all fail with `fault`. The store is seeded with the
/// `Scale` category and the `CT King` training center so athlete references
/// resolve.
pub async fn failing_app(fault: WriteFault) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());

    CategoryRepository::create(
        &*store,
        &NewCategory {
            id: Uuid::new_v4(),
            name: "Scale".to_string(),
        },
    )
    .await
    .unwrap();
    TrainingCenterRepository::create(
        &*store,
        &NewTrainingCenter {
            id: Uuid::new_v4(),
            name: "CT King".to_string(),
            address: "Rua X, Q02".to_string(),
            owner: "Marcos".to_string(),
        },
    )
    .await
    .unwrap();

    let failing = Arc::new(FailingWrites {
        inner: store.clone(),
        fault,
    });
    let state = AppState::new(failing.clone(), failing.clone(), failing);
    (app(state), store)
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(store.clone(), store.clone(), store.clone());
    (app(state), store)
}

// Helper function to send requests to the app
pub async fn send_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder().method(method).uri(uri);

    let request = if let Some(body) = body {
        request_builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

pub async fn create_category(app: &Router, name: &str) -> Value {
    let (status, body) = send_request(
        app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub async fn create_training_center(app: &Router, name: &str) -> Value {
    let (status, body) = send_request(
        app,
        Method::POST,
        "/api/training-centers",
        Some(json!({ "name": name, "address": "Rua X, Q02", "owner": "Marcos" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

pub fn athlete_payload(national_id: &str, category: &str, training_center: &str) -> Value {
    json!({
        "name": "Joao",
        "national_id": national_id,
        "age": 25,
        "weight": 75.5,
        "height": 1.70,
        "sex": "M",
        "category": { "name": category },
        "training_center": { "name": training_center }
    })
}
