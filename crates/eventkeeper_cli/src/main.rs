//! EventKeeper command-line host.
//!
//! # Responsibility
//! - Run one "page load" per invocation against a SQLite-backed store.
//! - Map rejections to a non-zero exit code.

mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventkeeper_core::db::open_db;
use eventkeeper_core::{
    default_log_level, init_logging, EventManager, PersistenceAdapter, RawEventFields,
    SqliteStorage, SubmitResult, EVENTS_STORAGE_KEY,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use terminal::TerminalSurface;

#[derive(Parser)]
#[command(name = "eventkeeper")]
#[command(about = "Keep a local list of events that survives restarts", version)]
struct Cli {
    /// SQLite database holding the event list
    #[arg(long, env = "EVENTKEEPER_DB", default_value = "eventkeeper.sqlite3")]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "EVENTKEEPER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, env = "EVENTKEEPER_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event and print the updated list
    Add {
        #[arg(long, default_value = "")]
        title: String,

        /// Free-text date, e.g. 2026-07-01
        #[arg(long, default_value = "")]
        date: String,

        #[arg(long, default_value = "")]
        description: String,
    },
    /// Print the stored events
    List,
    /// Print the raw stored JSON value (`null` when nothing was saved)
    Export,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::List => "list",
            Self::Export => "export",
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }
    info!(
        "event=cli_run module=cli status=start command={}",
        cli.command.name()
    );

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open event database `{}`", cli.db.display()))?;
    let storage = SqliteStorage::try_new(&conn)?;

    match cli.command {
        Commands::Add {
            title,
            date,
            description,
        } => {
            let fields = RawEventFields::new(title, date, description);
            let mut page = EventManager::start(storage, TerminalSurface::with_fields(fields));
            let result = page.submit_form();
            println!("{}", page.surface().screen());
            if page.surface().alerted() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(match result {
                SubmitResult::Accepted {
                    persisted: false, ..
                } => {
                    eprintln!("warning: event kept for this run only; saving failed");
                    ExitCode::from(2)
                }
                SubmitResult::Accepted { .. } => ExitCode::SUCCESS,
                SubmitResult::Rejected(_) => ExitCode::FAILURE,
            })
        }
        Commands::List => {
            let page = EventManager::start(storage, TerminalSurface::default());
            println!("{}", page.surface().screen());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Export => {
            let raw = storage.read(EVENTS_STORAGE_KEY)?;
            match raw {
                Some(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
                None => println!("null"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
