//! Projtrack CLI - interactive console for recording projects

mod input;
mod menu;
mod prompt;

use clap::Parser;
use projtrack_core::commands::project::ProjectRepository;
use projtrack_core::config::Config;
use projtrack_core::storage::{Database, DatabaseConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;

use crate::input::LineReader;
use crate::menu::MenuLoop;
use crate::prompt::Prompter;

#[derive(Parser)]
#[command(name = "projtrack")]
#[command(author, version, about = "Interactive console for recording projects", long_about = None)]
struct Cli {
    /// Database file to use instead of the configured location
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the interactive session
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("projtrack_core=info".parse()?)
                .add_directive("projtrack_cli=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let db_path = cli
        .db_path
        .unwrap_or_else(|| config.storage.resolved_path());
    let db = Database::new(
        DatabaseConfig::with_path(db_path).max_connections(config.storage.max_connections),
    )
    .await?;
    info!(path = %db.path().display(), "Opened project store");

    let repository = ProjectRepository::new(&db);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = MenuLoop::new(
        Prompter::new(LineReader::new(stdin.lock()), stdout.lock()),
        &repository,
    );
    menu.run().await?;

    db.close().await;
    Ok(())
}
