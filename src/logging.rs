//! Logging setup on top of `tracing`.
//!
//! Everything is written to a daily rotating file so log output never lands
//! on the TUI. Writes go through a background worker; keep the returned
//! [`LogGuard`] alive until exit so buffered lines are flushed.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "schedview=info,warn";

/// File name prefix for the rotating log files.
const LOG_FILE_PREFIX: &str = "schedview.log";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV_VAR: &str = "SCHEDVIEW_LOG_DIR";

/// Flushes pending log lines when dropped.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard {
    _worker: WorkerGuard,
    directory: PathBuf,
}

impl LogGuard {
    /// Directory the log files are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if no log directory can be determined or created, or if a global
/// subscriber was already installed.
pub fn init() -> anyhow::Result<LogGuard> {
    let directory = log_directory()
        .ok_or_else(|| anyhow::anyhow!("Could not determine a log directory"))?;
    std::fs::create_dir_all(&directory)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &directory, LOG_FILE_PREFIX);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %directory.display(),
        "schedview starting up"
    );

    Ok(LogGuard {
        _worker: worker,
        directory,
    })
}

/// Where log files go: `$SCHEDVIEW_LOG_DIR`, else `<data_local_dir>/schedview/logs`.
pub fn log_directory() -> Option<PathBuf> {
    match std::env::var_os(LOG_DIR_ENV_VAR) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::data_local_dir().map(|base| base.join("schedview").join("logs")),
    }
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("schedview shutting down");
}
