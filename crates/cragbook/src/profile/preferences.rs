use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grade::{BoulderSystem, Category, GradingSystem, RopeSystem};

/// Grading systems the climber wants grades shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StoredPreferences")]
pub struct GradePreferences {
    pub boulder: BoulderSystem,
    pub rope: RopeSystem,
}

impl GradePreferences {
    pub fn new(boulder: BoulderSystem, rope: RopeSystem) -> Self {
        Self { boulder, rope }
    }

    /// Display system for climbs of `category`
    pub fn system_for(&self, category: Category) -> GradingSystem {
        match category {
            Category::Boulder => GradingSystem::Boulder(self.boulder),
            Category::Rope => GradingSystem::Rope(self.rope),
        }
    }
}

/// Preferences as written on disk; names are checked on load.
#[derive(Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    boulder: Option<String>,
    #[serde(default)]
    rope: Option<String>,
}

fn parse_or_default<T: FromStr + Default>(name: Option<String>, category: Category) -> T {
    let Some(name) = name else {
        return T::default();
    };
    T::from_str(&name).unwrap_or_else(|_| {
        warn!(
            "Unknown {} grading system {:?} in profile, using default",
            category, name
        );
        T::default()
    })
}

impl From<StoredPreferences> for GradePreferences {
    fn from(stored: StoredPreferences) -> Self {
        Self {
            boulder: parse_or_default(stored.boulder, Category::Boulder),
            rope: parse_or_default(stored.rope, Category::Rope),
        }
    }
}
