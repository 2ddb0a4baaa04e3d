use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter for the given mode; `RUST_LOG` takes precedence when set.
fn env_filter(debug_mode: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| mode_filter(debug_mode))
}

fn mode_filter(debug_mode: bool) -> EnvFilter {
    if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Create the log directory if it doesn't exist.
pub fn ensure_log_dir(log_dir: &Utf8Path) -> Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }
    Ok(())
}

/// Setup console logging, optionally mirrored into a rotating log file.
///
/// Console output carries the user-facing progress messages, with ANSI
/// colours. When `log_dir` is given, a daily rotating file appender is added.
///
/// # Arguments
/// * `log_dir` - Directory for log files, or `None` for console only
/// * `log_prefix` - Prefix for log files (e.g., "iconic")
/// * `debug_mode` - If true, use debug level; otherwise use info level
///
/// # Returns
/// A guard that must be held for the duration of the program to keep file logging active
pub fn setup_logging(
    log_dir: Option<&Utf8Path>,
    log_prefix: &str,
    debug_mode: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            ensure_log_dir(dir)?;

            let file_appender = rolling::daily(dir, log_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(debug_mode))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: dir={:?}, prefix={}, debug={}",
        log_dir,
        log_prefix,
        debug_mode
    );

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_directory_created() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().join("logs")).unwrap();

        // Only directory creation; installing a global subscriber would
        // conflict with other tests in the same process
        ensure_log_dir(&log_dir).unwrap();
        assert!(log_dir.exists());

        // Idempotent
        ensure_log_dir(&log_dir).unwrap();
    }

    #[test]
    fn test_mode_filter_levels() {
        assert_eq!(mode_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(mode_filter(false).max_level_hint(), Some(LevelFilter::INFO));
    }
}
