//! # PoE Calc Terminal Library
//!
//! Core library for the PoE budget calculator terminal application.
//! This is the main entry point that configures and runs the app.
//!
//! ## Module Organization
//! ```text
//! poe_terminal_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Calculator session wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── Operations called by the UI
//! ├── ui/
//! │   ├── mod.rs      ◄─── App + key handling
//! │   └── render.rs   ◄─── Screen layout
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ui;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use crossterm::event::{self, Event, KeyEventKind};
use directories::ProjectDirs;
use ratatui::DefaultTerminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::ConfigState;
use ui::{App, KeyOutcome};

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "poe-calc.log";

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • POE_CALC_* environment variables over defaults                    │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • File in the log directory (the terminal owns stdout)              │
/// │     • Default: info,poe=debug, can be overridden with RUST_LOG          │
/// │                                                                         │
/// │  3. Enter the Terminal ───────────────────────────────────────────────► │
/// │     • Raw mode + alternate screen                                       │
/// │     • Draw, read one key, repeat until quit                             │
/// │                                                                         │
/// │  4. Restore the Terminal ─────────────────────────────────────────────► │
/// │     • Always, even when the loop fails                                  │
/// │     • Optionally print the session summary as JSON                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let (config, config_errors) = ConfigState::from_env();

    let log_path = init_tracing(&config)?;
    info!(?log_path, "Starting PoE Calc");
    for err in &config_errors {
        warn!(error = %err, "Ignoring invalid configuration value");
    }
    let active = serde_json::to_string(&commands::config::get_config(&config))?;
    info!(config = %active, "Configuration loaded");

    let mut app = App::new(config);

    let mut terminal = ratatui::try_init().context("Failed to set up the terminal")?;
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result?;

    info!("PoE Calc exited");

    if app.config().print_summary_on_exit {
        let summary = commands::session::get_session_summary(app.session(), app.config());
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|frame| ui::render::draw(frame, app))
            .context("Failed to draw the screen")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal input")? {
            // Windows reports releases too.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == KeyOutcome::Quit {
                return Ok(());
            }
        }
    }
}

/// Initializes the tracing subscriber, writing to the log file.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=poe=trace` - Show trace for poe crates only
/// - Default: `info,poe=debug`
fn init_tracing(config: &ConfigState) -> anyhow::Result<PathBuf> {
    let dir = log_directory(config)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,poe=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(path)
}

/// Determines the log directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.poecalc.poe-calc/`
/// - **Windows**: `%APPDATA%\poecalc\poe-calc\data\`
/// - **Linux**: `~/.local/share/poe-calc/`
///
/// ## Override
/// Set `POE_CALC_LOG_DIR` to use a custom directory.
fn log_directory(config: &ConfigState) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.log_dir {
        return Ok(dir.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "poecalc", "poe-calc")
        .context("Could not determine app data directory")?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_override() {
        let config = ConfigState {
            log_dir: Some(PathBuf::from("/tmp/poe-logs")),
            ..ConfigState::default()
        };
        assert_eq!(log_directory(&config).unwrap(), PathBuf::from("/tmp/poe-logs"));
    }
}
