//! Climb records.
//!
//! This module contains the logged-climb types and display helpers:
//! - `Climb`, `NewClimb` - stored climb records
//! - `ClimbType` - Boulder, Top Rope, Lead (mapped to a grade `Category`)
//! - `ClimbStatus` - Completed, Failed, Flash
//! - `DisplayClimb` - a climb with its grade converted for display
//! - Duration parsing for session time

mod display;
mod duration;
mod record;

pub use display::*;
pub use duration::*;
pub use record::*;
