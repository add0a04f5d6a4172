//! Logging infrastructure for FYI.
//!
//! Structured logging via the `tracing` ecosystem. The dashboard owns the
//! terminal while it runs, so log output goes to a file only:
//!
//! - JSON lines written to `~/.fyi/logs/fyi.log` (rotated daily)
//! - `RUST_LOG` overrides the default filter
//! - `-v` raises the default level to DEBUG
//!
//! ## Example
//!
//! ```no_run
//! use fyi_core::logging;
//!
//! let _guard = logging::init_logging(None, false).expect("logging init");
//! tracing::info!("dashboard started");
//! ```

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{FyiError, Result};

/// Log file name prefix inside the log directory.
pub const LOG_FILE_NAME: &str = "fyi.log";

/// Guard that must be held to ensure log flushing on shutdown.
///
/// Keep this guard alive for the lifetime of the application.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the FYI logging system.
///
/// # Arguments
///
/// * `log_dir` - Optional custom log directory. Defaults to `~/.fyi/logs/`
/// * `verbose` - If true, sets log level to DEBUG. Otherwise uses INFO.
pub fn init_logging(log_dir: Option<PathBuf>, verbose: bool) -> Result<LogGuard> {
    let log_dir = match log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };

    std::fs::create_dir_all(&log_dir).map_err(|e| FyiError::DirectoryCreation {
        path: log_dir.clone(),
        source: e,
    })?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_span_list(true)
        .with_file(verbose)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| FyiError::internal(format!("failed to install log subscriber: {e}")))?;

    tracing::debug!(log_dir = %log_dir.display(), verbose, "logging initialized");

    Ok(LogGuard {
        _file_guard: Some(file_guard),
    })
}

/// Initialize minimal logging for tests.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Filter directive used when `RUST_LOG` is not set.
fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("fyi={level},fyi_core={level},fyi_sources={level},fyi_tui={level}")
}

/// Get the default log directory path.
///
/// Returns `~/.fyi/logs/`
pub fn default_log_dir() -> Result<PathBuf> {
    Ok(crate::config::fyi_home()?.join("logs"))
}
