use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, ViewError};

/// Where log lines go. The TUI owns the terminal, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("queryview").join("queryview.log"))
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ViewError::Config(format!("invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber. Returns the log file path when logging to a file.
///
/// Without a platform data directory, file logging is skipped silently.
pub fn init_logging(level: &str, target: LogTarget) -> Result<Option<PathBuf>> {
    let filter = env_filter(level)?;

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| ViewError::Config(e.to_string()))?;
            Ok(None)
        }
        LogTarget::File => {
            let Some(path) = log_file_path() else {
                return Ok(None);
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| ViewError::io(parent, e))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| ViewError::io(&path, e))?;
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| ViewError::Config(e.to_string()))?;
            Ok(Some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_config_error() {
        // RUST_LOG takes precedence when set, so only check the fallback parse.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = env_filter("queryview=notalevel").unwrap_err();
        assert!(matches!(err, ViewError::Config(_)));
    }

    #[test]
    fn test_valid_level_parses() {
        assert!(env_filter("queryview=debug").is_ok());
    }
}
