//! Delete command for removing a logged climb.

use std::path::Path;

use anyhow::Result;

use crate::cli_utils;

pub fn run(data_dir: &Path, id: &str) -> Result<()> {
    let mut logbook = cli_utils::open_logbook(data_dir)?;
    logbook.delete_climb(id)?;
    println!("Deleted {}", id);
    Ok(())
}
