use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::preferences::GradePreferences;
use crate::grade::{BoulderSystem, RopeSystem};

/// Climber profile and display settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub display_name: String,
    pub gender: String,
    pub birthday: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub home_gym: Option<String>,
    pub saved_gyms: Vec<String>,
    pub grades: GradePreferences,
}

/// Partial profile change; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub home_gym: Option<String>,
    pub boulder_system: Option<BoulderSystem>,
    pub rope_system: Option<RopeSystem>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Profile {
    /// Onboarding is done once the climber has a name.
    pub fn is_setup_complete(&self) -> bool {
        !self.display_name.trim().is_empty()
    }

    /// Add or remove a saved gym. Returns true if the gym is now saved.
    pub fn toggle_saved_gym(&mut self, gym: &str) -> bool {
        if let Some(pos) = self.saved_gyms.iter().position(|g| g == gym) {
            self.saved_gyms.remove(pos);
            false
        } else {
            self.saved_gyms.push(gym.to_string());
            true
        }
    }

    /// Apply a partial update. Blank names and gyms are ignored.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.display_name.filter(|n| !n.trim().is_empty()) {
            self.display_name = name;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(birthday) = update.birthday {
            self.birthday = Some(birthday);
        }
        if let Some(url) = update.avatar_url.filter(|u| !u.is_empty()) {
            self.avatar_url = Some(url);
        }
        if let Some(gym) = update.home_gym.filter(|g| !g.trim().is_empty()) {
            self.home_gym = Some(gym);
        }
        if let Some(system) = update.boulder_system {
            self.grades.boulder = system;
        }
        if let Some(system) = update.rope_system {
            self.grades.rope = system;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_needs_setup() {
        let mut profile = Profile::default();
        assert!(!profile.is_setup_complete());
        profile.display_name = "Alex".into();
        assert!(profile.is_setup_complete());
    }

    #[test]
    fn test_toggle_saved_gym() {
        let mut profile = Profile::default();
        assert!(profile.toggle_saved_gym("Boulder Barn"));
        assert!(profile.toggle_saved_gym("Vertical World"));
        assert_eq!(profile.saved_gyms, ["Boulder Barn", "Vertical World"]);
        assert!(!profile.toggle_saved_gym("Boulder Barn"));
        assert_eq!(profile.saved_gyms, ["Vertical World"]);
    }

    #[test]
    fn test_apply_only_changes_given_fields() {
        let mut profile = Profile {
            display_name: "Alex".into(),
            home_gym: Some("The Cave".into()),
            ..Profile::default()
        };
        profile.apply(ProfileUpdate {
            display_name: Some("  ".into()),
            rope_system: Some(RopeSystem::French),
            ..ProfileUpdate::default()
        });
        assert_eq!(profile.display_name, "Alex");
        assert_eq!(profile.home_gym.as_deref(), Some("The Cave"));
        assert_eq!(profile.grades.rope, RopeSystem::French);
        assert_eq!(profile.grades.boulder, BoulderSystem::VScale);
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: Profile =
            serde_json::from_str(r#"{"display_name":"Sam","grades":{"boulder":"Font"}}"#).unwrap();
        assert_eq!(profile.display_name, "Sam");
        assert_eq!(profile.grades.boulder, BoulderSystem::Font);
        assert_eq!(profile.grades.rope, RopeSystem::Yds);
        assert!(profile.saved_gyms.is_empty());
    }
}
