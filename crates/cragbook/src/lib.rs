//! # cragbook
//!
//! Core library for the cragbook climbing log.
//!
//! This crate provides:
//! - Grade scales for boulder and rope grading systems, and conversion between them
//! - Climb records and display-time grade conversion
//! - Climber profile and grading-system preferences
//! - Dashboard statistics
//! - A storage port with in-memory and JSON-file implementations
//! - History export (TSV/JSON)

pub mod climb;
pub mod config;
pub mod error;
pub mod export;
pub mod grade;
pub mod logbook;
pub mod profile;
pub mod stats;
pub mod storage;

// Re-export from grade module
pub use grade::{
    BoulderSystem, Category, Conversion, DifficultyScale, GradeRegistry, GradingSystem,
    RopeSystem, UnchangedReason,
};

// Re-export from climb module
pub use climb::{Climb, ClimbStatus, ClimbType, DisplayClimb, NewClimb, display_climbs};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{ExportFormat, export_history, generate_history_json, generate_history_tsv};

pub use logbook::Logbook;
pub use profile::{GradePreferences, Profile, ProfileUpdate};
pub use stats::{GradeBucket, UserStats, grade_distribution};
pub use storage::{JsonFileStore, MemoryStore, Storage};
