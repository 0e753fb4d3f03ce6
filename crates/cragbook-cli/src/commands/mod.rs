//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod convert;
pub mod dashboard;
pub mod delete;
pub mod export;
pub mod history;
pub mod log;
pub mod profile;
pub mod scales;
pub mod stats;
