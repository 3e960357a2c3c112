//! Parameter store transports.
//!
//! Two implementations of [`psclient_core::ParameterStore`]:
//! - [`SsmStore`]: AWS Systems Manager Parameter Store over signed HTTPS
//! - [`MemoryStore`]: everything in memory, optionally loaded from a JSON
//!   snapshot; used in tests and for offline runs

#![warn(clippy::all)]

pub mod error;
pub mod memory;
pub mod ssm;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use ssm::{Credentials, SsmStore, SsmStoreBuilder};
