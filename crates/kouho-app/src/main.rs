use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kouho_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod loader;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(
    name = "kouho",
    version,
    about = "Prefix-lookup dictionary with a candidate chip grid"
)]
struct Cli {
    /// TSV dictionary (source<TAB>translation); embedded data when omitted
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log destination while the TUI owns the terminal
    #[arg(long, default_value = "kouho.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let mut config = Config::load(cli.config.as_deref());
    if let Some(dict) = cli.dict {
        config.dictionary.path = Some(dict);
    }
    if let Some(rows) = cli.rows {
        config.ui.rows = rows;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}

fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if atty::is(atty::Stream::Stderr) {
        // stderr is the terminal the TUI draws on; keep logs out of it
        let file = File::create(log_file)
            .with_context(|| format!("creating log file {}", log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
