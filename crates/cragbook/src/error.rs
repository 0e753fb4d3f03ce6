use thiserror::Error;

use crate::grade::{Category, GradingSystem};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown {category} grading system: {name}")]
    UnknownSystem { category: Category, name: String },

    #[error("Scale for {system} has {actual} grades, expected {expected}")]
    ScaleLength {
        system: GradingSystem,
        expected: usize,
        actual: usize,
    },

    #[error("Scale for {0} is defined more than once")]
    DuplicateSystem(GradingSystem),

    #[error("No scale defined for {0}")]
    MissingScale(GradingSystem),

    #[error("Grade label {label:?} appears in both {first} and {second}")]
    DuplicateLabel {
        label: String,
        first: GradingSystem,
        second: GradingSystem,
    },

    #[error("Climb not found: {0}")]
    ClimbNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
