use std::fmt;

mod athlete;
mod category;
mod training_center;

pub use athlete::{Athlete, AthleteChanges, NewAthlete};
pub use category::{Category, NewCategory};
pub use training_center::{NewTrainingCenter, TrainingCenter};

/// The kinds of record the API manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Athlete,
    Category,
    TrainingCenter,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::Category => "category",
            Self::TrainingCenter => "training center",
        }
    }

    /// Capitalized form for the start of a message
    pub fn label(&self) -> &'static str {
        match self {
            Self::Athlete => "Athlete",
            Self::Category => "Category",
            Self::TrainingCenter => "Training center",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
