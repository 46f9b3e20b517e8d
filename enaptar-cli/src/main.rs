mod app;
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use enaptar_core::time::parse_date;
use enaptar_core::{EnaptarConfig, EventStore};
use tracing_subscriber::EnvFilter;

use crate::app::App;

#[derive(Parser)]
#[command(name = "enaptar")]
#[command(about = "Pick a day, see its events, add or delete them")]
struct Cli {
    /// Events file (overrides events_file from config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the events of a day
    Day {
        /// YYYY-MM-DD, "today", "tomorrow" or "yesterday"
        date: Option<String>,
    },
    /// Add an event
    Add {
        title: String,

        /// Day of the event (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time as HH:MM (defaults to 00:00)
        #[arg(short, long)]
        time: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Show the details of an event
    Show {
        /// Row number as printed by `enaptar day`
        index: usize,

        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an event
    Delete {
        /// Row number as printed by `enaptar day`
        index: usize,

        #[arg(short, long)]
        date: Option<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show config and events file paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ENAPTAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let events_path = resolve_events_path(cli.file)?;
    tracing::debug!(path = %events_path.display(), "using events file");

    if let Some(Commands::Config) = cli.command {
        return commands::config::run(&events_path);
    }

    let store = EventStore::load(&events_path)
        .with_context(|| format!("Failed to load events from {}", events_path.display()))?;

    match cli.command {
        None => {
            let mut app = App::new(store, today);
            commands::interactive::run(&mut app)
        }
        Some(Commands::Day { date }) => {
            let app = App::new(store, resolve_day(date.as_deref(), today)?);
            commands::day::run(&app, today)
        }
        Some(Commands::Add {
            title,
            date,
            time,
            description,
        }) => {
            let mut app = App::new(store, resolve_day(date.as_deref(), today)?);
            commands::add::run(&mut app, title, time, description)
        }
        Some(Commands::Show { index, date }) => {
            let app = App::new(store, resolve_day(date.as_deref(), today)?);
            commands::show::run(&app, index)
        }
        Some(Commands::Delete { index, date, yes }) => {
            let mut app = App::new(store, resolve_day(date.as_deref(), today)?);
            commands::delete::run(&mut app, index, yes)
        }
        Some(Commands::Config) => Ok(()),
    }
}

/// `--file` wins over config.toml and the environment.
fn resolve_events_path(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(EnaptarConfig::load()?.events_path()),
    }
}

fn resolve_day(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s, today)?),
        None => Ok(today),
    }
}
