use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors at the edges of the viewer: reading inputs, config and log files.
///
/// Rendering itself never fails.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

impl ViewError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ViewError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ViewError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
