//! Configuration for the parameter store client.
//!
//! This crate turns flags, environment variables and an optional TOML file
//! into one [`Config`] value that is handed to the client at startup. Nothing
//! here is global; callers own the resulting value.
//!
//! ```toml
//! # ~/.aws-ps-client.toml
//! aws-access-key = "/run/secrets/aws_key"   # a value or a file holding it
//! aws-access-secret = "/run/secrets/aws_secret"
//! aws-region = "us-west-2"
//! format = "bash"
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod indirect;
pub mod loader;

pub use error::{ConfigError, Result};
pub use format::OutputFormat;
pub use indirect::read_indirect;
pub use loader::{Config, ConfigLoader, Settings, CONFIG_FILE_NAME, DEFAULT_REGION};
