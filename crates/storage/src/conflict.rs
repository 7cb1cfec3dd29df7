//! Classification of failed writes.
//!
//! Unique violations are an expected, client-facing outcome (a duplicate
//! name or national id). Every other failure is reported to the operator and
//! surfaced to the client as a generic internal error.

use sqlx::postgres::PgDatabaseError;

use crate::error::StorageError;

/// How a failed write should be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteFailure {
    /// A unique constraint rejected the write on `field`.
    UniqueConflict {
        field: String,
        value: Option<String>,
    },
    /// Any other integrity constraint rejected the write.
    IntegrityFailure,
    Unhandled,
}

/// Decide how a failed write should be reported.
pub fn classify(error: &StorageError) -> WriteFailure {
    match error {
        StorageError::UniqueViolation { field, value } => WriteFailure::UniqueConflict {
            field: field.clone(),
            value: value.clone(),
        },
        StorageError::ConstraintViolation(_) => WriteFailure::IntegrityFailure,
        StorageError::Database(sqlx::Error::Database(db_err)) if error.is_unique_violation() => {
            let (field, value) = unique_key(&**db_err);
            WriteFailure::UniqueConflict { field, value }
        }
        _ if error.is_integrity_violation() => WriteFailure::IntegrityFailure,
        _ => WriteFailure::Unhandled,
    }
}

/// Convert a failed INSERT/UPDATE into a [`StorageError`], lifting
/// constraint violations out of the raw driver error.
pub fn map_write_error(error: sqlx::Error) -> StorageError {
    let error = StorageError::from(error);

    if error.is_unique_violation()
        && let StorageError::Database(sqlx::Error::Database(ref db_err)) = error
    {
        let (field, value) = unique_key(&**db_err);
        return StorageError::UniqueViolation { field, value };
    }

    if error.is_foreign_key_violation() {
        return StorageError::ConstraintViolation(
            "Referenced record no longer exists".to_string(),
        );
    }

    error
}

fn unique_key(db_err: &dyn sqlx::error::DatabaseError) -> (String, Option<String>) {
    let detail = db_err
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(PgDatabaseError::detail);

    if let Some((field, value)) = detail.and_then(parse_unique_detail) {
        return (field, Some(value));
    }

    let field = db_err
        .constraint()
        .map(field_from_constraint)
        .unwrap_or_else(|| "value".to_string());

    (field, None)
}

/// Parse the detail PostgreSQL attaches to a unique violation:
/// `Key (national_id)=(12345678900) already exists.`
pub fn parse_unique_detail(detail: &str) -> Option<(String, String)> {
    let rest = detail.strip_prefix("Key (")?;
    let (field, rest) = rest.split_once(")=(")?;
    let end = rest.rfind(')')?;

    Some((field.to_string(), rest[..end].to_string()))
}

/// `athlete_national_id_key` -> `national_id`, for the constraints in our
/// migrations. Unknown names are returned untouched.
fn field_from_constraint(constraint: &str) -> String {
    const TABLES: &[&str] = &["training_center_", "category_", "athlete_"];

    let trimmed = constraint.strip_suffix("_key").unwrap_or(constraint);
    TABLES
        .iter()
        .find_map(|table| trimmed.strip_prefix(table))
        .unwrap_or(trimmed)
        .to_string()
}
