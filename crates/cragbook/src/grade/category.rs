use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use super::system::{BoulderSystem, GradingSystem, RopeSystem};

/// Climbing discipline; each has its own family of grading systems.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Boulder,
    Rope,
}

const BOULDER_SYSTEMS: [GradingSystem; 2] = [
    GradingSystem::Boulder(BoulderSystem::VScale),
    GradingSystem::Boulder(BoulderSystem::Font),
];

const ROPE_SYSTEMS: [GradingSystem; 3] = [
    GradingSystem::Rope(RopeSystem::Yds),
    GradingSystem::Rope(RopeSystem::French),
    GradingSystem::Rope(RopeSystem::Uiaa),
];

impl Category {
    /// Grading systems of this category, in search order.
    pub fn systems(&self) -> &'static [GradingSystem] {
        match self {
            Self::Boulder => &BOULDER_SYSTEMS,
            Self::Rope => &ROPE_SYSTEMS,
        }
    }

    /// Default system for new profiles (V-Scale / YDS)
    pub fn default_system(&self) -> GradingSystem {
        match self {
            Self::Boulder => GradingSystem::Boulder(BoulderSystem::default()),
            Self::Rope => GradingSystem::Rope(RopeSystem::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
