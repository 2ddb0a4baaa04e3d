//! iconic - Change directory icons easily on macOS, providing an icon directory.
//!
//! Main entry point for the command line tool.
//!
//! # Execution Flow
//!
//! 1. Parse arguments
//! 2. Load `config.yaml` from the per-user config directory (or `--config`)
//! 3. Initialize logging (console, plus rotating files when configured)
//! 4. Validate target and source, discover folders and icons
//! 5. Assign icons, recording each changed folder in the history file
//!
//! # Exit Status
//!
//! - `0` when the run completes, even if single folders could not be changed
//! - `1` when an argument is not a directory, or nothing was found to work on

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};
use iconic::{APP_NAME, Cli, ConfigManager, RunRequest, SystemIconSetter, VERSION};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config_manager = ConfigManager::from_project_dirs(APP_NAME)?;
    if let Some(path) = &cli.config {
        config_manager = config_manager.with_user_config_path(path);
    }
    let user_config = config_manager.load_user_config()?;

    let log_dir = config_manager.log_dir();
    let _guard = iconic::logging::setup_logging(
        user_config
            .iconic_settings
            .log_to_file
            .then_some(log_dir.as_path()),
        APP_NAME,
        cli.debug_mode(&user_config),
    )?;

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let request = RunRequest {
        target: cli.target.clone(),
        source: cli.source.clone(),
        options: cli.traversal_options(&user_config),
        ignore_cache: cli.ignore_cache,
        ignore: cli.ignore_list(&user_config),
        icon_extensions: user_config.iconic_settings.icon_extensions.clone(),
        history_path: config_manager.history_path(&user_config),
        base_dir: current_dir()?,
    };

    match iconic::execute(&request, &SystemIconSetter::new()) {
        Ok(report) => {
            report.metrics.log_summary();
            tracing::info!("Operation complete!");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("{}", e);
            if e.shows_usage() {
                Cli::command().print_help()?;
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn current_dir() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().context("Failed to read the current directory")?;
    Utf8PathBuf::try_from(dir).context("Current directory is not valid UTF-8")
}
