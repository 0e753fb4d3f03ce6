//! Application state for a single climber.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::climb::{Climb, DisplayClimb, NewClimb, display_climbs};
use crate::error::Result;
use crate::grade::{BoulderSystem, GradeRegistry, RopeSystem};
use crate::profile::{GradePreferences, Profile, ProfileUpdate};
use crate::stats::UserStats;
use crate::storage::Storage;

/// Profile and climb list of one climber, persisted through a `Storage`.
pub struct Logbook<S: Storage> {
    store: S,
    registry: &'static GradeRegistry,
    profile: Profile,
    /// Newest first
    climbs: Vec<Climb>,
}

impl<S: Storage> Logbook<S> {
    /// Load the profile and climbs from `store`.
    pub fn open(store: S) -> Result<Self> {
        let profile = store.load_profile()?;
        let climbs = store.load_climbs()?;
        debug!(
            "Opened logbook with {} climbs (setup complete: {})",
            climbs.len(),
            profile.is_setup_complete()
        );
        Ok(Self {
            store,
            registry: GradeRegistry::standard(),
            profile,
            climbs,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn climbs(&self) -> &[Climb] {
        &self.climbs
    }

    pub fn preferences(&self) -> &GradePreferences {
        &self.profile.grades
    }

    pub fn registry(&self) -> &'static GradeRegistry {
        self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Log a climb. The grade is stored exactly as entered.
    pub fn add_climb(&mut self, climb: NewClimb) -> Result<&Climb> {
        let climb = self.store.insert_climb(climb)?;
        info!("Logged climb {} ({} {})", climb.id, climb.name, climb.grade);
        let id = climb.id.clone();
        self.climbs.insert(0, climb);
        // back-filled climbs move behind newer dates
        self.climbs.sort_by(|a, b| b.date.cmp(&a.date));
        let idx = self.climbs.iter().position(|c| c.id == id).unwrap_or(0);
        Ok(&self.climbs[idx])
    }

    pub fn delete_climb(&mut self, id: &str) -> Result<()> {
        self.store.delete_climb(id)?;
        self.climbs.retain(|c| c.id != id);
        info!("Deleted climb {}", id);
        Ok(())
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&Profile> {
        if update.is_empty() {
            return Ok(&self.profile);
        }
        self.profile.apply(update);
        self.store.save_profile(&self.profile)?;
        Ok(&self.profile)
    }

    pub fn set_grade_preferences(
        &mut self,
        boulder: Option<BoulderSystem>,
        rope: Option<RopeSystem>,
    ) -> Result<GradePreferences> {
        self.update_profile(ProfileUpdate {
            boulder_system: boulder,
            rope_system: rope,
            ..ProfileUpdate::default()
        })?;
        Ok(self.profile.grades)
    }

    /// Add or remove a saved gym. Returns true if the gym is now saved.
    pub fn toggle_saved_gym(&mut self, gym: &str) -> Result<bool> {
        let saved = self.profile.toggle_saved_gym(gym);
        self.store.save_profile(&self.profile)?;
        Ok(saved)
    }

    /// Climbs with grades converted into the preferred systems.
    pub fn display_climbs(&self) -> Vec<DisplayClimb<'_>> {
        display_climbs(&self.climbs, &self.profile.grades, self.registry)
    }

    pub fn stats(&self, today: NaiveDate) -> UserStats {
        UserStats::compute(&self.climbs, &self.profile.grades, self.registry, today)
    }

    /// Drop in-memory state back to defaults (as after signing out).
    ///
    /// Stored data is not touched.
    pub fn reset(&mut self) {
        self.profile = Profile::default();
        self.climbs.clear();
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climb::{ClimbStatus, ClimbType};
    use crate::storage::MemoryStore;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, d).unwrap()
    }

    #[test]
    fn test_add_climb_prepends_and_persists() {
        let mut logbook = Logbook::open(MemoryStore::new()).unwrap();
        logbook
            .add_climb(NewClimb::new("First", "V2", ClimbType::Boulder, date(1)))
            .unwrap();
        let added = logbook
            .add_climb(NewClimb::new("Second", "5.9", ClimbType::Lead, date(2)))
            .unwrap();
        assert_eq!(added.name, "Second");
        assert_eq!(logbook.climbs()[0].name, "Second");
        assert_eq!(logbook.store().load_climbs().unwrap().len(), 2);
    }

    #[test]
    fn test_backfilled_climb_sorts_by_date() {
        let mut logbook = Logbook::open(MemoryStore::new()).unwrap();
        logbook
            .add_climb(NewClimb::new("Recent", "V2", ClimbType::Boulder, date(9)))
            .unwrap();
        let added = logbook
            .add_climb(NewClimb::new("Old", "V3", ClimbType::Boulder, date(3)))
            .unwrap();
        assert_eq!(added.name, "Old");
        let names: Vec<_> = logbook.climbs().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Recent", "Old"]);
    }

    #[test]
    fn test_preference_change_affects_display_only() {
        let mut logbook = Logbook::open(MemoryStore::new()).unwrap();
        logbook
            .add_climb(NewClimb::new("Problem", "V5", ClimbType::Boulder, date(4)))
            .unwrap();
        logbook
            .set_grade_preferences(Some(BoulderSystem::Font), None)
            .unwrap();

        assert_eq!(logbook.display_climbs()[0].display_grade, "6C");
        assert_eq!(logbook.climbs()[0].grade, "V5");
        assert_eq!(
            logbook.store().load_profile().unwrap().grades.boulder,
            BoulderSystem::Font
        );
    }

    #[test]
    fn test_stats_and_delete() {
        let mut logbook = Logbook::open(MemoryStore::new()).unwrap();
        let id = logbook
            .add_climb(
                NewClimb::new("Project", "V9", ClimbType::Boulder, date(5))
                    .with_status(ClimbStatus::Failed),
            )
            .unwrap()
            .id
            .clone();
        assert_eq!(logbook.stats(date(5)).success_rate, 0);

        logbook.delete_climb(&id).unwrap();
        assert!(logbook.climbs().is_empty());
        assert!(logbook.delete_climb(&id).is_err());
    }

    #[test]
    fn test_open_uses_stored_profile() {
        let profile = Profile {
            display_name: "Alex".to_string(),
            grades: GradePreferences::new(BoulderSystem::Font, RopeSystem::French),
            ..Profile::default()
        };
        let mut logbook = Logbook::open(MemoryStore::new().with_profile(profile)).unwrap();
        assert!(logbook.profile().is_setup_complete());

        logbook
            .add_climb(NewClimb::new("Slab", "5.10", ClimbType::TopRope, date(6)))
            .unwrap();
        assert_eq!(logbook.display_climbs()[0].display_grade, "6a+");
    }

    #[test]
    fn test_toggle_gym_and_reset() {
        let mut logbook = Logbook::open(MemoryStore::new()).unwrap();
        assert!(logbook.toggle_saved_gym("Crag Hall").unwrap());
        assert_eq!(
            logbook.store().load_profile().unwrap().saved_gyms,
            ["Crag Hall"]
        );

        logbook.reset();
        assert!(logbook.profile().saved_gyms.is_empty());
        // stored data survives a reset
        let store = logbook.into_store();
        assert_eq!(store.load_profile().unwrap().saved_gyms.len(), 1);
    }
}
