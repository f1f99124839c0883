//! Logging for graphdefang-gallery.
//!
//! Uses `tracing` with a file sink in the platform cache directory
//! (`~/.cache/graphdefang-gallery/gallery.log` on Linux). Verbosity is an
//! `EnvFilter` directive taken from `GRAPHDEFANG_LOG` (default: `info`).
//!
//! ```bash
//! # Follow requests while serving
//! GRAPHDEFANG_LOG=debug graphdefang-gallery serve --dir /var/www/graphs
//!
//! # Only HTTP traces
//! GRAPHDEFANG_LOG=tower_http=trace graphdefang-gallery serve --dir /var/www/graphs
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::{self, format::FmtSpan}, prelude::*, EnvFilter};

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "GRAPHDEFANG_LOG";

const APP_NAME: &str = "graphdefang-gallery";
const LOG_FILE_NAME: &str = "gallery.log";

/// Initialize the logging system.
///
/// Always logs to the cache-directory file. When `GRAPHDEFANG_LOG` is set,
/// also logs to stderr. The returned guard flushes the file writer on drop
/// and must be held until exit.
pub fn init_logging() -> Result<WorkerGuard> {
    let log_file = log_file_path().context("Failed to determine cache directory")?;
    if let Some(dir) = log_file.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let log_env = std::env::var(LOG_ENV).ok();
    let verbose = log_env.is_some();
    let filter_str = log_env.unwrap_or_else(|| "info".to_string());

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
    });

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(&filter_str))
        .with(file_layer)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;

    Ok(guard)
}

/// Get the path to the log file.
pub fn log_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}
