//! Errors raised while constructing a store.
//!
//! Errors from backend calls are [`psclient_core::TransportError`]; this type
//! only covers setup (bad configuration, unreadable snapshots).

use thiserror::Error;

/// Store construction errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required setting is missing or malformed
    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Snapshot file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

/// Result type for store construction.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Snapshot(e.to_string())
    }
}
