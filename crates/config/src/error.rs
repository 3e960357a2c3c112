//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named config file could not be read
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrongly typed keys
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Unknown output format
    #[error("invalid format {0:?}: expected bash, json or text")]
    InvalidFormat(String),

    /// Credentials are required but absent
    #[error("missing {0}: set it by flag, environment or config file")]
    Missing(&'static str),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
