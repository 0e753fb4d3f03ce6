use serde::Serialize;

use super::record::Climb;
use crate::grade::{GradeRegistry, GradingSystem};
use crate::profile::GradePreferences;

/// A climb with its grade shown in the climber's preferred system.
///
/// Built for rendering and export only; never written back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayClimb<'a> {
    #[serde(flatten)]
    pub climb: &'a Climb,
    /// Grade in `system`, or the stored grade if it was not recognized
    pub display_grade: String,
    pub system: GradingSystem,
    /// Normalized difficulty (0 = easiest), if the grade was recognized
    pub difficulty: Option<usize>,
}

impl DisplayClimb<'_> {
    pub fn recognized(&self) -> bool {
        self.difficulty.is_some()
    }
}

/// Convert every climb's grade into the preferred system of its category.
pub fn display_climbs<'a>(
    climbs: &'a [Climb],
    prefs: &GradePreferences,
    registry: &GradeRegistry,
) -> Vec<DisplayClimb<'a>> {
    climbs
        .iter()
        .map(|climb| {
            let system = prefs.system_for(climb.category());
            let conversion = registry.convert(&climb.grade, system);
            DisplayClimb {
                climb,
                display_grade: conversion.as_str().to_string(),
                system,
                difficulty: conversion.index(),
            }
        })
        .collect()
}
