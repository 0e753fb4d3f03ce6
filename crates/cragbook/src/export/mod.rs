//! History export and console formatting.
//!
//! - `ExportFormat` with TSV and JSON renderers for display climbs
//! - Colored console output for history, stats and grade tables

mod console;
mod history;

pub use console::*;
pub use history::*;
