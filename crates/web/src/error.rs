use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::{
    conflict::{self, WriteFailure},
    error::StorageError,
    models::EntityKind,
};
use uuid::Uuid;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    /// A natural-key reference in a create payload matched no record
    ReferenceNotFound {
        kind: EntityKind,
        name: String,
    },
    NotFound {
        kind: EntityKind,
        id: Uuid,
    },
    /// A unique field collided with an existing record
    AlreadyExists {
        kind: EntityKind,
        field: String,
        value: String,
    },
    InternalServerError(String),
}

impl WebError {
    /// Map a failed lookup by id, turning `NotFound` into a 404 naming the id.
    pub fn for_lookup(kind: EntityKind, id: Uuid, error: StorageError) -> Self {
        match error {
            StorageError::NotFound => Self::NotFound { kind, id },
            other => Self::Storage(other),
        }
    }

    /// Map a failed insert. `submitted` is reported when the backend does not
    /// say which value collided.
    pub fn for_write(kind: EntityKind, error: StorageError, submitted: &str) -> Self {
        match conflict::classify(&error) {
            WriteFailure::UniqueConflict { field, value } => {
                let value = value.unwrap_or_else(|| submitted.to_string());
                tracing::warn!(%kind, %field, %value, "Rejected duplicate {}", kind);
                Self::AlreadyExists { kind, field, value }
            }
            WriteFailure::IntegrityFailure => Self::InternalServerError(format!(
                "Integrity failure writing {}: {:?}",
                kind, error
            )),
            WriteFailure::Unhandled => Self::Storage(error),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ReferenceNotFound { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } => StatusCode::SEE_OTHER,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ReferenceNotFound { kind, name } => {
                write!(f, "{} {} was not found", kind.label(), name)
            }
            Self::NotFound { kind, id } => write!(f, "{} not found with id: {}", kind.label(), id),
            Self::AlreadyExists { kind, field, value } => write!(
                f,
                "{} with {} {} already exists",
                kind.label(),
                field,
                value
            ),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let mut field_errors = Vec::new();
                collect_field_errors(None, errors, &mut field_errors);

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::ReferenceNotFound { .. } | Self::NotFound { .. } | Self::AlreadyExists { .. } => {
                json!({
                    "error": self.to_string()
                })
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                json!({
                    "error": "An internal error occurred"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Flatten validation errors, including nested structs, into `path: message`.
fn collect_field_errors(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        path,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_errors(Some(&path), nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(Some(&format!("{}[{}]", path, index)), nested, out);
                }
            }
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
