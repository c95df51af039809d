//! Logging initialization.
//!
//! The wizard owns the alternate screen while it runs, so TUI sessions log
//! to a file under the data dir; `show`/`clear` log to stderr like any CLI.
//! Each session gets its own file and nothing is rotated — stale logs are
//! cheap and the user can prune the directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Where log lines go for this invocation
#[derive(Debug, PartialEq, Eq)]
enum LogSink {
    /// TUI session: a file under the data dir, since the terminal is busy
    SessionFile,
    /// CLI subcommand: plain stderr
    Stderr,
}

impl LogSink {
    fn choose(config: &Config, is_tui_mode: bool) -> Self {
        if is_tui_mode && config.logging.to_file {
            LogSink::SessionFile
        } else {
            LogSink::Stderr
        }
    }
}

/// Keeps the log sink alive for the lifetime of the process.
///
/// Dropping the handle flushes the non-blocking writer, so `main` must hold
/// it until exit.
pub struct LoggingHandle {
    _guard: Option<WorkerGuard>,
    session_log: Option<PathBuf>,
}

impl LoggingHandle {
    /// Path of this session's log file, when one was opened
    pub fn session_log(&self) -> Option<&Path> {
        self.session_log.as_deref()
    }
}

/// Install the global tracing subscriber.
///
/// Level precedence: `--debug` beats everything, then `RUST_LOG`, then the
/// configured `logging.level`.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(level_filter(config, debug_override))
        .with_target(false);

    match LogSink::choose(config, is_tui_mode) {
        LogSink::Stderr => {
            fmt.with_writer(std::io::stderr).init();
            Ok(LoggingHandle {
                _guard: None,
                session_log: None,
            })
        }
        LogSink::SessionFile => {
            let (writer, guard, path) = session_log_writer(config)?;
            // ANSI escapes are for terminals, not log files
            fmt.with_ansi(false).with_writer(writer).init();
            Ok(LoggingHandle {
                _guard: Some(guard),
                session_log: Some(path),
            })
        }
    }
}

fn level_filter(config: &Config, debug_override: bool) -> EnvFilter {
    if debug_override {
        return EnvFilter::new("debug");
    }
    match std::env::var("RUST_LOG") {
        Ok(spec) => EnvFilter::new(spec),
        Err(_) => EnvFilter::new(&config.logging.level),
    }
}

/// Open a fresh, timestamped log file for this session
fn session_log_writer(config: &Config) -> Result<(NonBlocking, WorkerGuard, PathBuf)> {
    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let filename = format!(
        "enroll-{}.log",
        chrono::Utc::now().format("%Y%m%dT%H%M%SZ")
    );
    let log_file_path = logs_dir.join(&filename);

    let appender = tracing_appender::rolling::never(&logs_dir, &filename);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    Ok((writer, guard, log_file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.storage.data_dir = Some(temp_dir.path().to_string_lossy().to_string());
        config
    }

    #[test]
    fn test_sink_selection() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);

        assert_eq!(LogSink::choose(&config, true), LogSink::SessionFile);
        assert_eq!(LogSink::choose(&config, false), LogSink::Stderr);

        // file logging disabled forces stderr even for the TUI
        config.logging.to_file = false;
        assert_eq!(LogSink::choose(&config, true), LogSink::Stderr);
    }

    #[test]
    fn test_session_log_writer_creates_dir_and_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let (_writer, _guard, path) = session_log_writer(&config).unwrap();

        assert!(config.logs_path().is_dir());
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("enroll-"));
        assert!(name.ends_with(".log"));
        assert!(path.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_debug_override_beats_configured_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.level = "warn".to_string();

        let filter = level_filter(&config, true);
        assert_eq!(filter.to_string(), "debug");
    }
}
