use super::{Storage, newest_first, next_climb_id};
use crate::climb::{Climb, NewClimb};
use crate::error::{Error, Result};
use crate::profile::Profile;

/// Store that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profile: Profile,
    climbs: Vec<Climb>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }
}

impl Storage for MemoryStore {
    fn load_profile(&self) -> Result<Profile> {
        Ok(self.profile.clone())
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.profile = profile.clone();
        Ok(())
    }

    fn load_climbs(&self) -> Result<Vec<Climb>> {
        Ok(newest_first(self.climbs.clone()))
    }

    fn insert_climb(&mut self, climb: NewClimb) -> Result<Climb> {
        let climb = climb.into_climb(next_climb_id(&self.climbs));
        self.climbs.push(climb.clone());
        Ok(climb)
    }

    fn delete_climb(&mut self, id: &str) -> Result<()> {
        let pos = self
            .climbs
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::ClimbNotFound(id.to_string()))?;
        self.climbs.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climb::ClimbType;
    use chrono::NaiveDate;

    #[test]
    fn test_insert_assigns_ids() {
        let mut store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let a = store
            .insert_climb(NewClimb::new("A", "V0", ClimbType::Boulder, date))
            .unwrap();
        let b = store
            .insert_climb(NewClimb::new("B", "V1", ClimbType::Boulder, date))
            .unwrap();
        assert_eq!(a.id, "c000001");
        assert_eq!(b.id, "c000002");

        let climbs = store.load_climbs().unwrap();
        assert_eq!(climbs[0].name, "B");
    }

    #[test]
    fn test_delete_unknown_climb() {
        let mut store = MemoryStore::new();
        let err = store.delete_climb("c000009").unwrap_err();
        assert!(matches!(err, Error::ClimbNotFound(id) if id == "c000009"));
    }
}
