use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoStaticStr};

use super::category::Category;
use crate::error::{Error, Result};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum BoulderSystem {
    #[default]
    #[serde(rename = "V-Scale")]
    #[strum(to_string = "V-Scale", serialize = "VScale", serialize = "V")]
    VScale,
    #[strum(to_string = "Font", serialize = "Fontainebleau")]
    Font,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RopeSystem {
    #[default]
    #[serde(rename = "YDS")]
    #[strum(to_string = "YDS")]
    Yds,
    #[strum(to_string = "French")]
    French,
    #[serde(rename = "UIAA")]
    #[strum(to_string = "UIAA")]
    Uiaa,
}

impl BoulderSystem {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl RopeSystem {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A grading system paired with the category it belongs to.
///
/// The pairing is fixed by construction, so a rope system can never be
/// handed to a boulder lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradingSystem {
    Boulder(BoulderSystem),
    Rope(RopeSystem),
}

impl GradingSystem {
    pub fn category(&self) -> Category {
        match self {
            Self::Boulder(_) => Category::Boulder,
            Self::Rope(_) => Category::Rope,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boulder(system) => system.name(),
            Self::Rope(system) => system.name(),
        }
    }

    /// Parse a system name that must belong to `category`.
    ///
    /// Names are matched case-insensitively ("yds", "V-Scale", "font").
    pub fn parse(category: Category, name: &str) -> Result<Self> {
        let name = name.trim();
        let parsed = match category {
            Category::Boulder => BoulderSystem::from_str(name).map(Self::Boulder).ok(),
            Category::Rope => RopeSystem::from_str(name).map(Self::Rope).ok(),
        };
        parsed.ok_or_else(|| Error::UnknownSystem {
            category,
            name: name.to_string(),
        })
    }
}

impl From<BoulderSystem> for GradingSystem {
    fn from(system: BoulderSystem) -> Self {
        Self::Boulder(system)
    }
}

impl From<RopeSystem> for GradingSystem {
    fn from(system: RopeSystem) -> Self {
        Self::Rope(system)
    }
}

impl std::fmt::Display for GradingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for GradingSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_names() {
        assert_eq!(BoulderSystem::VScale.name(), "V-Scale");
        assert_eq!(BoulderSystem::Font.name(), "Font");
        assert_eq!(RopeSystem::Yds.name(), "YDS");
        assert_eq!(RopeSystem::French.name(), "French");
        assert_eq!(RopeSystem::Uiaa.name(), "UIAA");
    }

    #[test]
    fn test_parse_accepts_aliases_and_case() {
        assert_eq!(
            GradingSystem::parse(Category::Boulder, "v-scale").ok(),
            Some(GradingSystem::Boulder(BoulderSystem::VScale))
        );
        assert_eq!(
            GradingSystem::parse(Category::Boulder, "V").ok(),
            Some(GradingSystem::Boulder(BoulderSystem::VScale))
        );
        assert_eq!(
            GradingSystem::parse(Category::Rope, " uiaa ").ok(),
            Some(GradingSystem::Rope(RopeSystem::Uiaa))
        );
    }

    #[test]
    fn test_parse_rejects_system_from_other_category() {
        let err = GradingSystem::parse(Category::Boulder, "YDS").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSystem {
                category: Category::Boulder,
                ..
            }
        ));
        assert!(GradingSystem::parse(Category::Rope, "Font").is_err());
    }

    #[test]
    fn test_serde_names_match_display_names() {
        assert_eq!(
            serde_json::to_string(&BoulderSystem::VScale).unwrap(),
            "\"V-Scale\""
        );
        assert_eq!(serde_json::to_string(&RopeSystem::Uiaa).unwrap(), "\"UIAA\"");
        assert_eq!(
            serde_json::to_string(&GradingSystem::Rope(RopeSystem::French)).unwrap(),
            "\"French\""
        );
    }
}
