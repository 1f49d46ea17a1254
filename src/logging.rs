use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::LoggingError;

/// Where log records end up when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Drop everything; stderr would tear the alternate screen.
    Silent,
    Stderr,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when it is set and parses. Returns
/// `Ok(false)` when nothing was installed.
pub fn init(config: &LogConfig, fallback: Fallback) -> Result<bool, LoggingError> {
    let filter = build_filter(&config.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match (&config.file, fallback) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (None, Fallback::Stderr) => builder.with_writer(std::io::stderr).try_init(),
        (None, Fallback::Silent) => return Ok(false),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))?;
    Ok(true)
}

/// Filter from `RUST_LOG`, or from `level` when the variable is unset.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|e| LoggingError::Filter(e.to_string())),
    }
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })
}
