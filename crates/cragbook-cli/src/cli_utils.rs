//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use cragbook::{JsonFileStore, Logbook};

/// Open the climber's logbook in `data_dir`.
pub fn open_logbook(data_dir: &Path) -> Result<Logbook<JsonFileStore>> {
    Logbook::open(JsonFileStore::new(data_dir))
        .with_context(|| format!("Failed to open logbook in {}", data_dir.display()))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a YYYY-MM-DD date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date {:?} (expected YYYY-MM-DD)", value))
}
