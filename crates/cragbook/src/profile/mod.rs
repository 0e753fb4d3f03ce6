//! Climber profile.
//!
//! - `Profile`, `ProfileUpdate` - profile fields and partial updates
//! - `GradePreferences` - preferred boulder and rope grading systems

mod preferences;
mod user;

pub use preferences::*;
pub use user::*;
