//! CLI argument definitions for cragbook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cragbook")]
#[command(about = "Climbing log with grade conversion", version)]
pub struct Args {
    /// Directory holding profile.json and climbs.json
    #[arg(long, global = true, value_name = "DIR", env = "CRAGBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a grade into another grading system
    Convert {
        /// Grade label (e.g., V4, 6a+, 5.10)
        grade: String,
        /// Grade category
        #[arg(long, short, value_enum)]
        category: CategoryArg,
        /// Target grading system (V-Scale, Font, YDS, French, UIAA)
        #[arg(long, short)]
        to: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the grade equivalence tables
    Scales {
        /// Only show one category
        #[arg(long, short, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Log a climb
    Log {
        /// Route or problem name
        #[arg(long)]
        name: String,
        /// Grade as shown at the gym, in any known system
        #[arg(long)]
        grade: String,
        /// Climb type
        #[arg(long = "type", short = 't', value_enum)]
        climb_type: ClimbTypeArg,
        /// Gym (defaults to the profile's home gym)
        #[arg(long)]
        gym: Option<String>,
        /// Outcome
        #[arg(long, short, value_enum, default_value = "completed")]
        status: StatusArg,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Time of day (e.g., 18:30)
        #[arg(long)]
        time: Option<String>,
        /// Session duration (e.g., "1h 15m")
        #[arg(long)]
        duration: Option<String>,
        /// Photo URL
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Show logged climbs in the preferred grading systems
    History {
        /// Maximum number of climbs (newest first)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a logged climb
    Delete {
        /// Climb ID (e.g., c000012)
        id: String,
    },
    /// Show dashboard statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Export history (grades in the preferred systems)
    Export {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormatArg,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show,
    /// Choose grading systems for display
    SetGrades {
        /// Boulder system (V-Scale, Font)
        #[arg(long)]
        boulder: Option<String>,
        /// Rope system (YDS, French, UIAA)
        #[arg(long)]
        rope: Option<String>,
    },
    /// Update profile details
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        /// Birthday (YYYY-MM-DD)
        #[arg(long)]
        birthday: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
        /// Home gym
        #[arg(long)]
        gym: Option<String>,
    },
    /// Save or unsave a gym
    ToggleGym {
        /// Gym name
        name: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryArg {
    Boulder,
    Rope,
}

impl From<CategoryArg> for cragbook::Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Boulder => Self::Boulder,
            CategoryArg::Rope => Self::Rope,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ClimbTypeArg {
    Boulder,
    TopRope,
    Lead,
}

impl From<ClimbTypeArg> for cragbook::ClimbType {
    fn from(arg: ClimbTypeArg) -> Self {
        match arg {
            ClimbTypeArg::Boulder => Self::Boulder,
            ClimbTypeArg::TopRope => Self::TopRope,
            ClimbTypeArg::Lead => Self::Lead,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusArg {
    Completed,
    Failed,
    Flash,
}

impl From<StatusArg> for cragbook::ClimbStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Completed => Self::Completed,
            StatusArg::Failed => Self::Failed,
            StatusArg::Flash => Self::Flash,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormatArg {
    Tsv,
    Json,
}

impl From<ExportFormatArg> for cragbook::ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Tsv => Self::Tsv,
            ExportFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["cragbook"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_convert() {
        let args =
            Args::try_parse_from(["cragbook", "convert", "V4", "-c", "boulder", "--to", "Font"])
                .unwrap();
        match args.command {
            Some(Command::Convert {
                grade,
                category,
                to,
                json,
            }) => {
                assert_eq!(grade, "V4");
                assert_eq!(category, CategoryArg::Boulder);
                assert_eq!(to, "Font");
                assert!(!json);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_parse_convert_requires_category() {
        assert!(Args::try_parse_from(["cragbook", "convert", "V4", "--to", "Font"]).is_err());
    }

    #[test]
    fn test_parse_log_defaults() {
        let args = Args::try_parse_from([
            "cragbook", "log", "--name", "Arete", "--grade", "5.11", "--type", "top-rope",
        ])
        .unwrap();
        match args.command {
            Some(Command::Log {
                name,
                climb_type,
                status,
                date,
                gym,
                ..
            }) => {
                assert_eq!(name, "Arete");
                assert_eq!(climb_type, ClimbTypeArg::TopRope);
                assert_eq!(status, StatusArg::Completed);
                assert!(date.is_none());
                assert!(gym.is_none());
            }
            _ => panic!("Expected Log command"),
        }
    }

    #[test]
    fn test_parse_global_data_dir_after_subcommand() {
        let args =
            Args::try_parse_from(["cragbook", "history", "-n", "5", "--data-dir", "/tmp/log"])
                .unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/log")));
        match args.command {
            Some(Command::History { limit, json }) => {
                assert_eq!(limit, Some(5));
                assert!(!json);
            }
            _ => panic!("Expected History command"),
        }
    }

    #[test]
    fn test_parse_profile_set_grades() {
        let args = Args::try_parse_from([
            "cragbook", "profile", "set-grades", "--boulder", "Font", "--rope", "UIAA",
        ])
        .unwrap();
        match args.command {
            Some(Command::Profile {
                action: Some(ProfileAction::SetGrades { boulder, rope }),
            }) => {
                assert_eq!(boulder.as_deref(), Some("Font"));
                assert_eq!(rope.as_deref(), Some("UIAA"));
            }
            _ => panic!("Expected Profile SetGrades command"),
        }
    }

    #[test]
    fn test_parse_export_format() {
        let args = Args::try_parse_from(["cragbook", "export", "-f", "json"]).unwrap();
        match args.command {
            Some(Command::Export { output, format }) => {
                assert!(output.is_none());
                assert_eq!(format, ExportFormatArg::Json);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        let result = Args::try_parse_from([
            "cragbook", "log", "--name", "x", "--grade", "V1", "-t", "boulder", "-s", "onsight",
        ]);
        assert!(result.is_err());
    }
}
