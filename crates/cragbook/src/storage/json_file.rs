use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Storage, newest_first, next_climb_id};
use crate::climb::{Climb, NewClimb};
use crate::config::storage::{CLIMBS_FILE, PROFILE_FILE};
use crate::error::{Error, Result};
use crate::profile::Profile;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ClimbFile {
    #[serde(default)]
    climbs: Vec<Climb>,
}

/// Store backed by `profile.json` and `climbs.json` in a data directory.
///
/// Missing files read as an empty log and a default profile. The directory
/// is created on first write.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.base_dir.join(name);
        if !path.exists() {
            debug!("{:?} not found, using defaults", path);
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.base_dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        debug!("Wrote {:?}", path);
        Ok(())
    }

    /// Stored climbs in insertion order
    fn read_climbs(&self) -> Result<Vec<Climb>> {
        Ok(self.read_json::<ClimbFile>(CLIMBS_FILE)?.climbs)
    }

    fn write_climbs(&self, climbs: Vec<Climb>) -> Result<()> {
        self.write_json(CLIMBS_FILE, &ClimbFile { climbs })
    }
}

impl Storage for JsonFileStore {
    fn load_profile(&self) -> Result<Profile> {
        self.read_json(PROFILE_FILE)
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.write_json(PROFILE_FILE, profile)
    }

    fn load_climbs(&self) -> Result<Vec<Climb>> {
        let climbs = self.read_climbs()?;
        debug!("Loaded {} climbs", climbs.len());
        Ok(newest_first(climbs))
    }

    fn insert_climb(&mut self, climb: NewClimb) -> Result<Climb> {
        let mut climbs = self.read_climbs()?;
        let climb = climb.into_climb(next_climb_id(&climbs));
        climbs.push(climb.clone());
        self.write_climbs(climbs)?;
        Ok(climb)
    }

    fn delete_climb(&mut self, id: &str) -> Result<()> {
        let mut climbs = self.read_climbs()?;
        let before = climbs.len();
        climbs.retain(|c| c.id != id);
        if climbs.len() == before {
            return Err(Error::ClimbNotFound(id.to_string()));
        }
        self.write_climbs(climbs)
    }
}
