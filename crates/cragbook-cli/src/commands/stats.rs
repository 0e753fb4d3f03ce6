//! Stats command for the dashboard numbers and grade pyramid.

use std::path::Path;

use anyhow::Result;
use cragbook::export::{format_distribution_console, format_stats_console};
use cragbook::{Category, grade_distribution};
use serde_json::json;
use strum::IntoEnumIterator;

use crate::cli_utils;

pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let logbook = cli_utils::open_logbook(data_dir)?;
    let stats = logbook.stats(cli_utils::today());

    if json {
        let boulder = grade_distribution(
            logbook.climbs(),
            Category::Boulder,
            logbook.preferences(),
            logbook.registry(),
        );
        let rope = grade_distribution(
            logbook.climbs(),
            Category::Rope,
            logbook.preferences(),
            logbook.registry(),
        );
        let value = json!({
            "stats": stats,
            "distribution": {
                "boulder": boulder,
                "rope": rope,
            },
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", format_stats_console(&stats));
    for category in Category::iter() {
        let buckets = grade_distribution(
            logbook.climbs(),
            category,
            logbook.preferences(),
            logbook.registry(),
        );
        let chart = format_distribution_console(&buckets);
        if !chart.is_empty() {
            println!("{} sends ({})", category, logbook.preferences().system_for(category));
            println!("{}", chart);
        }
    }
    Ok(())
}
