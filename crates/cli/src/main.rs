use anyhow::Result;
use clap::{Parser, Subcommand};
use launchwatch_core::constants::DEFAULT_DB_FILE;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "launchwatch")]
#[command(
    about = "Weekly rocket launch watcher: mails a digest of new and rescheduled launches",
    long_about = None
)]
struct Cli {
    /// SQLite file holding previously seen launches [default: ./rocket_launches.db]
    #[arg(long, global = true, env = "LAUNCHWATCH_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch this week's launches, record them and mail the digest (default)
    Run(RunArgs),
    /// Print stored launch records as JSON
    History {
        /// Only rows for this launch name
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// The store lives next to `config.json` and `recipients.json` unless overridden.
pub(crate) fn get_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(get_db_path);
    tracing::debug!(db = %db_path.display(), "using launch store");

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::run(args, &db_path).await?,
        Commands::History { name } => commands::history::run(&db_path, name.as_deref())?,
    }

    Ok(())
}
