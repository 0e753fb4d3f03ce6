//! Export command for writing the climb history.

use std::path::Path;

use anyhow::{Context, Result};
use cragbook::{ExportFormat, export_history};

use crate::cli_utils;

pub fn run(data_dir: &Path, output: Option<&Path>, format: ExportFormat) -> Result<()> {
    let logbook = cli_utils::open_logbook(data_dir)?;
    let climbs = logbook.display_climbs();

    if let Some(output_path) = output {
        export_history(output_path, &climbs, format)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Exported {} climbs to: {}", climbs.len(), output_path.display());
    } else {
        println!("{}", format.render(&climbs)?);
    }
    Ok(())
}
