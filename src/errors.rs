// Error types for the host boundary
// Window manager operations themselves never fail: unknown ids and bad
// geometry are no-ops or clamps. These errors cover what sits around them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WmError {
    #[error("Window manager state is unavailable: {0}")]
    LockPoisoned(String),

    #[error("Invalid resize edge: {0}")]
    InvalidResizeEdge(String),

    #[error("No application matches '{0}'")]
    UnknownApplication(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Failed to emit event: {0}")]
    Emit(String),
}

/// Result type for boundary operations
pub type Result<T> = std::result::Result<T, WmError>;
