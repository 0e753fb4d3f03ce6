//! History export (TSV and JSON formats)

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::climb::DisplayClimb;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn render(&self, climbs: &[DisplayClimb<'_>]) -> Result<String> {
        match self {
            Self::Tsv => Ok(generate_history_tsv(climbs)),
            Self::Json => generate_history_json(climbs),
        }
    }
}

/// History data for JSON export
#[derive(Debug, Serialize)]
pub struct HistoryJson<'a, 'b> {
    pub climbs: &'b [DisplayClimb<'a>],
}

pub fn format_history_tsv_header() -> String {
    [
        "ID",
        "Date",
        "Time",
        "Name",
        "Gym",
        "Type",
        "Grade",
        "System",
        "Logged Grade",
        "Status",
        "Duration",
    ]
    .join("\t")
}

/// Free text may not break the column layout.
fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

pub fn format_history_tsv_row(entry: &DisplayClimb<'_>) -> String {
    let climb = entry.climb;
    [
        climb.id.clone(),
        climb.date.format("%Y-%m-%d").to_string(),
        tsv_field(&climb.time),
        tsv_field(&climb.name),
        tsv_field(&climb.gym),
        climb.climb_type.name().to_string(),
        tsv_field(&entry.display_grade),
        entry.system.name().to_string(),
        tsv_field(&climb.grade),
        climb.status.name().to_string(),
        tsv_field(&climb.duration),
    ]
    .join("\t")
}

pub fn generate_history_tsv(climbs: &[DisplayClimb<'_>]) -> String {
    let mut lines = vec![format_history_tsv_header()];
    lines.extend(climbs.iter().map(format_history_tsv_row));
    lines.join("\n")
}

pub fn generate_history_json(climbs: &[DisplayClimb<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&HistoryJson { climbs })?)
}

pub fn export_history<P: AsRef<Path>>(
    path: P,
    climbs: &[DisplayClimb<'_>],
    format: ExportFormat,
) -> Result<()> {
    fs::write(path, format.render(climbs)?)?;
    Ok(())
}
