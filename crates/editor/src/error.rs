//! Error types for the fallible outer surfaces (host protocol and file IO).
//! Document operations themselves never fail.

use thiserror::Error;

/// Errors raised while parsing host commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid command JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors raised while reading or writing settings, catalogs and scene files
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no data directory available on this platform")]
    NoDataDir,
}
