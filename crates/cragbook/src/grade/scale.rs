use super::system::{BoulderSystem, GradingSystem, RopeSystem};

/// Hueco V-Scale
pub const V_SCALE: &[&str] = &[
    "V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "V10", "V11", "V12", "V13", "V14",
    "V15",
];

/// Fontainebleau bouldering grades
pub const FONT: &[&str] = &[
    "3", "4", "5", "6A", "6B", "6C", "7A", "7A+", "7B", "7B+", "7C", "8A", "8A+", "8B", "8B+", "8C",
];

/// Yosemite Decimal System
pub const YDS: &[&str] = &[
    "5.6", "5.7", "5.8", "5.9", "5.10-", "5.10", "5.10+", "5.11-", "5.11", "5.11+", "5.12-",
    "5.12", "5.12+", "5.13", "5.14", "5.15",
];

/// French sport grades
pub const FRENCH: &[&str] = &[
    "4", "5a", "5b", "5c", "6a", "6a+", "6b", "6b+", "6c", "7a", "7a+", "7b", "7c", "8a", "8b",
    "9a",
];

/// UIAA roman-numeral grades
pub const UIAA: &[&str] = &[
    "IV", "V-", "V", "V+", "VI-", "VI", "VI+", "VII-", "VII", "VII+", "VIII-", "VIII", "IX", "X",
    "XI", "XII",
];

/// Ordered grade labels for one grading system.
///
/// Index 0 is the easiest grade. Scales of the same category are
/// index-aligned: equal positions denote equivalent difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyScale {
    system: GradingSystem,
    labels: &'static [&'static str],
}

impl DifficultyScale {
    pub const fn new(system: GradingSystem, labels: &'static [&'static str]) -> Self {
        Self { system, labels }
    }

    pub fn system(&self) -> GradingSystem {
        self.system
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of an exact label match
    pub fn index_of(&self, grade: &str) -> Option<usize> {
        self.labels.iter().position(|&label| label == grade)
    }

    pub fn label_at(&self, index: usize) -> Option<&'static str> {
        self.labels.get(index).copied()
    }

    pub fn contains(&self, grade: &str) -> bool {
        self.index_of(grade).is_some()
    }
}

/// Built-in scales, grouped by category in search order.
pub fn builtin_scales() -> Vec<DifficultyScale> {
    vec![
        DifficultyScale::new(GradingSystem::Boulder(BoulderSystem::VScale), V_SCALE),
        DifficultyScale::new(GradingSystem::Boulder(BoulderSystem::Font), FONT),
        DifficultyScale::new(GradingSystem::Rope(RopeSystem::Yds), YDS),
        DifficultyScale::new(GradingSystem::Rope(RopeSystem::French), FRENCH),
        DifficultyScale::new(GradingSystem::Rope(RopeSystem::Uiaa), UIAA),
    ]
}
