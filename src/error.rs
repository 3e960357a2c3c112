//! Unified error type for the client.
//!
//! Wraps the errors of the internal crates so callers can match on one type
//! while still reaching the typed resolver error underneath.

use thiserror::Error;

use crate::types::{ConfigError, ResolveError, StoreError};

/// All client errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is incomplete
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Store could not be constructed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Query failed (bad input, transport failure, missing version)
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The resolver error, if the query itself failed.
    pub fn as_resolve(&self) -> Option<&ResolveError> {
        match self {
            Error::Resolve(e) => Some(e),
            _ => None,
        }
    }

    /// Check if the key or requested version does not exist.
    pub fn is_not_found(&self) -> bool {
        self.as_resolve().map_or(false, ResolveError::is_not_found)
    }

    /// Check if the requested version is absent from the key's history.
    pub fn is_version_not_found(&self) -> bool {
        self.as_resolve()
            .map_or(false, ResolveError::is_version_not_found)
    }

    /// Check if the error was caused by the caller's input or settings.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::Config(_) | Error::Store(StoreError::InvalidConfig(_)) => true,
            Error::Resolve(e) => e.is_input_error(),
            _ => false,
        }
    }
}
