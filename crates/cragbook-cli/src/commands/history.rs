//! History command for listing climbs in the preferred grading systems.

use std::path::Path;

use anyhow::Result;
use cragbook::export::format_climb_line;
use cragbook::generate_history_json;

use crate::cli_utils;

pub fn run(data_dir: &Path, limit: Option<usize>, json: bool) -> Result<()> {
    let logbook = cli_utils::open_logbook(data_dir)?;
    let mut climbs = logbook.display_climbs();
    if let Some(limit) = limit {
        climbs.truncate(limit);
    }

    if json {
        println!("{}", generate_history_json(&climbs)?);
        return Ok(());
    }

    if climbs.is_empty() {
        eprintln!("No climbs logged yet");
        return Ok(());
    }
    let prefs = logbook.preferences();
    eprintln!(
        "Grades shown in {} / {}",
        prefs.boulder.name(),
        prefs.rope.name()
    );
    for climb in &climbs {
        println!("{}", format_climb_line(climb));
    }
    Ok(())
}
