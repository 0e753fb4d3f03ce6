//! Storage port for the climb log.
//!
//! - `Storage` - trait the `Logbook` persists through
//! - `MemoryStore` - in-process store (tests, dry runs)
//! - `JsonFileStore` - JSON files in a data directory

mod json_file;
mod memory;

pub use json_file::*;
pub use memory::*;

use crate::climb::{Climb, NewClimb};
use crate::error::Result;
use crate::profile::Profile;

/// Persistence for the profile and the climb list.
pub trait Storage {
    fn load_profile(&self) -> Result<Profile>;

    fn save_profile(&mut self, profile: &Profile) -> Result<()>;

    /// All climbs, newest first.
    fn load_climbs(&self) -> Result<Vec<Climb>>;

    /// Store a new climb and return it with its assigned id.
    fn insert_climb(&mut self, climb: NewClimb) -> Result<Climb>;

    /// Remove a climb. Fails with `Error::ClimbNotFound` for unknown ids.
    fn delete_climb(&mut self, id: &str) -> Result<()>;
}

/// Sort stored (oldest-inserted first) climbs newest first.
///
/// Climbs on the same date keep reverse insertion order.
pub fn newest_first(mut climbs: Vec<Climb>) -> Vec<Climb> {
    climbs.reverse();
    climbs.sort_by(|a, b| b.date.cmp(&a.date));
    climbs
}

/// Next free id of the form `c000042`.
///
/// Ids whose number cannot be incremented are treated like foreign ids.
pub fn next_climb_id(existing: &[Climb]) -> String {
    let next = existing
        .iter()
        .filter_map(|c| c.id.strip_prefix('c')?.parse::<u64>().ok()?.checked_add(1))
        .max()
        .unwrap_or(1);
    format!("c{:06}", next)
}
