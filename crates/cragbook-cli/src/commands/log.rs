//! Log command for recording a climb.

use std::path::Path;

use anyhow::Result;
use cragbook::{ClimbStatus, ClimbType, NewClimb};
use tracing::warn;

use crate::cli_utils;

pub struct LogArgs {
    pub name: String,
    pub grade: String,
    pub climb_type: ClimbType,
    pub gym: Option<String>,
    pub status: ClimbStatus,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub image_url: Option<String>,
}

pub fn run(data_dir: &Path, args: LogArgs) -> Result<()> {
    let mut logbook = cli_utils::open_logbook(data_dir)?;

    let date = match args.date.as_deref() {
        Some(value) => cli_utils::parse_date(value)?,
        None => cli_utils::today(),
    };
    let gym = args
        .gym
        .or_else(|| logbook.profile().home_gym.clone())
        .unwrap_or_default();

    let category = args.climb_type.category();
    if logbook
        .registry()
        .difficulty_index(&args.grade, category)
        .is_none()
    {
        warn!(
            "{:?} is not a known {} grade; it will be shown as entered",
            args.grade, category
        );
    }

    let mut climb = NewClimb::new(args.name, args.grade, args.climb_type, date)
        .with_gym(gym)
        .with_status(args.status)
        .with_time(args.time.unwrap_or_default())
        .with_duration(args.duration.unwrap_or_default());
    climb.image_url = args.image_url;

    let climb = logbook.add_climb(climb)?;
    println!(
        "Logged {} {} ({}) as {}",
        climb.name, climb.grade, climb.climb_type, climb.id
    );
    Ok(())
}
