use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

/// An athlete row joined with the names of its category and training center.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Athlete {
    pub pk_id: i32,
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category_id: i32,
    pub training_center_id: i32,
    pub category_name: String,
    pub training_center_name: String,
}

/// A fully resolved athlete ready to insert. `category_id` and
/// `training_center_id` are internal keys, never client-supplied.
#[derive(Debug, Clone)]
pub struct NewAthlete {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub national_id: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub category_id: i32,
    pub training_center_id: i32,
}

/// Partial update; `None` leaves the column as it is.
#[derive(Debug, Clone, Default)]
pub struct AthleteChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
}
