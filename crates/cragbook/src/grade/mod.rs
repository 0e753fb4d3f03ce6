//! Grade scales and conversion.
//!
//! This module contains the grading systems and the conversion between them:
//! - `Category` - climbing disciplines (Boulder, Rope)
//! - `BoulderSystem`, `RopeSystem`, `GradingSystem` - named grading systems
//! - `DifficultyScale` - 16 ordered grade labels of one system
//! - `GradeRegistry`, `Conversion` - index-aligned lookup between systems

mod category;
mod registry;
mod scale;
mod system;

pub use category::*;
pub use registry::*;
pub use scale::*;
pub use system::*;
