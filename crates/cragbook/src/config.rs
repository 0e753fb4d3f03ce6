//! Configuration constants.
//!
//! - Grade scale shape
//! - Dashboard stats tuning
//! - Storage file names

/// Grade scale configuration.
pub mod scale {
    /// Number of grades in every difficulty scale.
    pub const SCALE_LEN: usize = 16;
}

/// Dashboard stats configuration.
pub mod stats {
    /// A climber counts as one level higher for every this many sends.
    pub const SENDS_PER_LEVEL: u32 = 10;
}

/// File names used by `JsonFileStore`.
pub mod storage {
    pub const PROFILE_FILE: &str = "profile.json";
    pub const CLIMBS_FILE: &str = "climbs.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_constants() {
        assert_eq!(scale::SCALE_LEN, 16);
    }

    #[test]
    fn test_storage_file_names_differ() {
        assert_ne!(storage::PROFILE_FILE, storage::CLIMBS_FILE);
    }
}
