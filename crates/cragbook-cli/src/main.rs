mod cli;
mod cli_utils;
mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use config::CliConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cragbook_cli=warn,cragbook=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = || -> Result<PathBuf> {
        CliConfig::load()?.resolve_data_dir(args.data_dir.as_deref())
    };

    match args.command {
        Some(Command::Convert {
            grade,
            category,
            to,
            json,
        }) => commands::convert::run(&grade, category.into(), &to, json),
        Some(Command::Scales { category }) => commands::scales::run(category.map(Into::into)),
        Some(Command::Log {
            name,
            grade,
            climb_type,
            gym,
            status,
            date,
            time,
            duration,
            image_url,
        }) => commands::log::run(
            &data_dir()?,
            commands::log::LogArgs {
                name,
                grade,
                climb_type: climb_type.into(),
                gym,
                status: status.into(),
                date,
                time,
                duration,
                image_url,
            },
        ),
        Some(Command::History { limit, json }) => commands::history::run(&data_dir()?, limit, json),
        Some(Command::Delete { id }) => commands::delete::run(&data_dir()?, &id),
        Some(Command::Stats { json }) => commands::stats::run(&data_dir()?, json),
        Some(Command::Profile { action }) => commands::profile::run(&data_dir()?, action),
        Some(Command::Export { output, format }) => {
            commands::export::run(&data_dir()?, output.as_deref(), format.into())
        }
        None => commands::dashboard::run(&data_dir()?),
    }
}
