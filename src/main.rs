//! countdown - a single-screen countdown timer for the terminal
//!
//! Parses the command line, installs file logging when asked to, and runs the
//! countdown screen until the user quits.

use anyhow::Context;
use bubbletea_rs::Program;
use countdown::{app, config::Config, App};
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let duration = config.duration()?;
    app::set_launch_duration(duration);
    info!(%duration, "starting countdown");

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to set up the terminal: {e}"))?;

    program
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("countdown exited with an error: {e}"))?;

    info!("countdown closed");
    Ok(())
}

/// Logs go to `--log-file`; stdout and stderr belong to the UI. Without a log
/// file no subscriber is installed and events are dropped.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
