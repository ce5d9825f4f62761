//! File logging for postfeed
//!
//! The terminal belongs to the UI, so all `tracing` output goes to a log file.
//! The filter is read from `POSTFEED_LOG` (e.g. `debug`, `postfeed=trace`).

use crate::{PostFeedError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_ENV: &str = "POSTFEED_LOG";

/// Default log file path (same directory as executable)
pub fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("postfeed.log")
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path` (or the default path).
/// The file is truncated so each run starts fresh. Returns the path in use.
pub fn init(path: Option<&Path>) -> Result<PathBuf> {
    let log_path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| PostFeedError::Logging(e.to_string()))?;

    Ok(log_path)
}
