//! Error types for parameter resolution.
//!
//! [`TransportError`] is what a backend returns; [`Error`] is what the
//! resolver returns. Transport errors pass through [`Error::Transport`]
//! unchanged, with no context added and no retry.

use std::num::ParseIntError;

use thiserror::Error;

use crate::types::Version;

/// Error code SSM uses for a key that does not exist.
pub const PARAMETER_NOT_FOUND: &str = "ParameterNotFound";

/// A failed backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The service rejected the request (missing key, auth, throttling, ...)
    #[error("{code}: {message}")]
    Service {
        /// Service error code, e.g. `ParameterNotFound`
        code: String,
        /// Message as returned by the service
        message: String,
    },

    /// The request never produced a response (DNS, TLS, timeout)
    #[error("connection failed: {0}")]
    Connection(String),

    /// The response could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Create a service error.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        TransportError::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The service error code, if the service answered.
    pub fn code(&self) -> Option<&str> {
        match self {
            TransportError::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Check if the backend reported the key as missing.
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(PARAMETER_NOT_FOUND)
    }
}

/// All resolver errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested version text is not a 64-bit integer
    #[error("invalid version {input:?}: {source}")]
    Parse {
        /// The text as supplied
        input: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// Key or path is empty
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Backend call failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Requested version is absent from the key's full history
    #[error("version {version} not found for key: {key}")]
    VersionNotFound {
        /// Version that was requested
        version: Version,
        /// Key whose history was scanned
        key: String,
    },
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error was raised before contacting the backend.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::InvalidKey(_))
    }

    /// Check if the key or one of its versions does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::VersionNotFound { .. } => true,
            Error::Transport(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Check if this is a missing-version error.
    pub fn is_version_not_found(&self) -> bool {
        matches!(self, Error::VersionNotFound { .. })
    }

    /// The underlying transport error, if any.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}
