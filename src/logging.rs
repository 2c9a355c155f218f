//! File-based `tracing` setup. Stdout belongs to the TUI, so events go to a
//! log file in the data directory.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::tui::AppError;

/// Installs the global subscriber, appending to [`Config::log_file`].
///
/// An unparsable filter falls back to [`DEFAULT_LOG_FILTER`].
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    fs::create_dir_all(&config.data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "spendlog starting");
    Ok(())
}
