//! Default view: greeting, stats and the most recent climbs.

use std::path::Path;

use anyhow::Result;
use cragbook::export::{format_climb_line, format_stats_console};

use crate::cli_utils;

const RECENT_CLIMBS: usize = 5;

pub fn run(data_dir: &Path) -> Result<()> {
    let logbook = cli_utils::open_logbook(data_dir)?;
    let profile = logbook.profile();

    if !profile.is_setup_complete() {
        println!("Welcome to cragbook! Set your name with:");
        println!("  cragbook profile set --name <NAME>");
        println!();
    } else {
        println!("Hi, {}", profile.display_name);
    }

    println!("{}", format_stats_console(&logbook.stats(cli_utils::today())));

    let climbs = logbook.display_climbs();
    if climbs.is_empty() {
        println!("No climbs yet. Log one with `cragbook log`.");
        return Ok(());
    }
    println!("Recent climbs");
    for climb in climbs.iter().take(RECENT_CLIMBS) {
        println!("{}", format_climb_line(climb));
    }
    Ok(())
}
