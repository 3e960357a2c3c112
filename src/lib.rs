//! # psclient
//!
//! Read-only client for the AWS Systems Manager Parameter Store.
//!
//! Fetches a single key or every key under a path, optionally pinned to a
//! historical version, and returns typed [`Parameter`] / [`ParameterSet`]
//! values. Formatting and printing are left to the caller (see the
//! `aws-ps-client` binary in `crates/cli`).
//!
//! ## Quick Start
//!
//! ```ignore
//! use psclient::prelude::*;
//!
//! let config = ConfigLoader::new().load()?;
//! let client = Client::from_config(&config)?;
//!
//! // Current value
//! let host = client.get("/app/prod/DB_HOST", None)?;
//!
//! // Version 3 of every key under /app/prod/, recursively
//! let tree = client.get_path("/app/prod/", true, Some("3"))?;
//! for p in &tree {
//!     println!("{} = {} (v{})", p.name, p.value, p.version);
//! }
//! ```
//!
//! ## Version Resolution
//!
//! 1. **No version** - the current value is returned as-is
//! 2. **Current version** - same, without touching history
//! 3. **Older version** - the key's history is paged until the version is found
//!
//! A path query fails as a whole if any one key lacks the requested version.

#![warn(missing_docs)]

mod client;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use client::{Client, ClientBuilder, APPLICATION_NAME};
pub use error::{Error, Result};

// Re-export types
pub use types::*;
