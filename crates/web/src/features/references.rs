use std::sync::Arc;

use storage::{
    models::EntityKind,
    repository::{CategoryRepository, TrainingCenterRepository},
};

use crate::error::{WebError, WebResult};

/// Records that can be referenced by name from a create payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Category,
    TrainingCenter,
}

impl From<ReferenceKind> for EntityKind {
    fn from(kind: ReferenceKind) -> Self {
        match kind {
            ReferenceKind::Category => EntityKind::Category,
            ReferenceKind::TrainingCenter => EntityKind::TrainingCenter,
        }
    }
}

/// Translates natural keys (names) into internal record keys.
#[derive(Clone)]
pub struct ReferenceResolver {
    categories: Arc<dyn CategoryRepository>,
    training_centers: Arc<dyn TrainingCenterRepository>,
}

impl ReferenceResolver {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        training_centers: Arc<dyn TrainingCenterRepository>,
    ) -> Self {
        Self {
            categories,
            training_centers,
        }
    }

    /// Returns the internal key of the record named `name`, or
    /// `ReferenceNotFound` when there is none.
    pub async fn resolve(&self, kind: ReferenceKind, name: &str) -> WebResult<i32> {
        let pk_id = match kind {
            ReferenceKind::Category => self
                .categories
                .find_by_name(name)
                .await?
                .map(|category| category.pk_id),
            ReferenceKind::TrainingCenter => self
                .training_centers
                .find_by_name(name)
                .await?
                .map(|center| center.pk_id),
        };

        pk_id.ok_or_else(|| {
            let kind = EntityKind::from(kind);
            tracing::warn!(%kind, name, "Unresolved reference");
            WebError::ReferenceNotFound {
                kind,
                name: name.to_string(),
            }
        })
    }
}
