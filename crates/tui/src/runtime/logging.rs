//! File-based logging setup.
//!
//! The terminal owns stdout while the UI runs, so logs go to a daily
//! rolling file instead. Filtering follows `RUST_LOG`.
//!
//! Logging is best effort: if the directory cannot be created the app runs
//! without a subscriber.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "keyz-tui.log";

/// Initializes the global subscriber writing to `log_dir`.
///
/// The returned guard must be held until exit so buffered logs are flushed.
/// Returns `None` if the log directory cannot be created or a subscriber is
/// already installed.
pub fn init_file_logging(log_dir: &Path) -> Option<WorkerGuard> {
    std::fs::create_dir_all(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .ok()?;

    Some(guard)
}
