//! Profile command for viewing and editing the climber profile.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use cragbook::{BoulderSystem, Category, GradingSystem, Profile, ProfileUpdate, RopeSystem};

use crate::cli::ProfileAction;
use crate::cli_utils;

pub fn run(data_dir: &Path, action: Option<ProfileAction>) -> Result<()> {
    let mut logbook = cli_utils::open_logbook(data_dir)?;

    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => print_profile(logbook.profile()),
        ProfileAction::SetGrades { boulder, rope } => {
            let boulder = boulder
                .as_deref()
                .map(|name| parse_system::<BoulderSystem>(Category::Boulder, name))
                .transpose()?;
            let rope = rope
                .as_deref()
                .map(|name| parse_system::<RopeSystem>(Category::Rope, name))
                .transpose()?;
            let prefs = logbook.set_grade_preferences(boulder, rope)?;
            println!(
                "Grades shown in {} (boulder) and {} (rope)",
                prefs.boulder.name(),
                prefs.rope.name()
            );
        }
        ProfileAction::Set {
            name,
            gender,
            birthday,
            avatar_url,
            gym,
        } => {
            let birthday = birthday
                .as_deref()
                .map(cli_utils::parse_date)
                .transpose()?;
            let profile = logbook.update_profile(ProfileUpdate {
                display_name: name,
                gender,
                birthday,
                avatar_url,
                home_gym: gym,
                ..ProfileUpdate::default()
            })?;
            print_profile(profile);
        }
        ProfileAction::ToggleGym { name } => {
            if logbook.toggle_saved_gym(&name)? {
                println!("Saved gym: {}", name);
            } else {
                println!("Removed gym: {}", name);
            }
        }
    }
    Ok(())
}

/// Parse a system name, naming the valid choices on failure.
fn parse_system<T: FromStr>(category: Category, name: &str) -> Result<T> {
    let choices: Vec<&str> = category.systems().iter().map(GradingSystem::name).collect();
    T::from_str(name.trim()).ok().with_context(|| {
        format!(
            "Unknown {} system {:?} (expected one of: {})",
            category,
            name,
            choices.join(", ")
        )
    })
}

fn print_profile(profile: &Profile) {
    let or_dash = |value: Option<&str>| value.unwrap_or("-").to_string();
    println!(
        "Name:        {}",
        if profile.is_setup_complete() {
            profile.display_name.as_str()
        } else {
            "(not set)"
        }
    );
    if !profile.gender.is_empty() {
        println!("Gender:      {}", profile.gender);
    }
    println!(
        "Birthday:    {}",
        or_dash(profile.birthday.map(|d| d.to_string()).as_deref())
    );
    println!("Home gym:    {}", or_dash(profile.home_gym.as_deref()));
    println!(
        "Saved gyms:  {}",
        if profile.saved_gyms.is_empty() {
            "-".to_string()
        } else {
            profile.saved_gyms.join(", ")
        }
    );
    println!("Boulder:     {}", profile.grades.boulder.name());
    println!("Rope:        {}", profile.grades.rope.name());
    if let Some(url) = &profile.avatar_url {
        println!("Avatar:      {}", url);
    }
}
