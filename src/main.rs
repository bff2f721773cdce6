//! volley - a terminal HTTP request workbench.
//!
//! This is the main binary: it loads the configuration and the saved
//! layout, runs the TUI, and saves the layout again on the way out.

use std::{
    fs::{self, File},
    sync::Mutex,
};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use volley_config::{Config, LayoutPreferences, persistence};
use volley_layout::LayoutEngine;
use volley_protocol::dummy::dummy_workspace;
use volley_tui::{App, terminal};

/// Log filter variable. Nothing is logged while it is unset.
const LOG_ENV: &str = "VOLLEY_LOG";

/// Sends `tracing` output to the log file when [`LOG_ENV`] is set.
///
/// The TUI owns the terminal, so logs never go to stdout or stderr.
fn init_logging() -> anyhow::Result<()> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(());
    };

    let path = persistence::log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::load().await?;
    let prefs = LayoutPreferences::load().unwrap_or_else(|error| {
        warn!(%error, "ignoring unreadable layout preferences");
        LayoutPreferences::default()
    });
    let engine = LayoutEngine::with_preferences(config.layout, &prefs);
    let mut app = App::with_engine(engine, dummy_workspace());
    info!("starting volley");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    if let Err(error) = app.preferences().save() {
        warn!(%error, "failed to save layout preferences");
    }

    result
}
