//! Public types, re-exported from the internal crates.

// Result values
pub use psclient_core::{HistoryEntry, Page, Parameter, ParameterSet, Version};

// Transport contract
pub use psclient_core::{ParameterStore, TransportError, TransportResult};

// Errors of the internal crates
pub use psclient_config::ConfigError;
pub use psclient_core::Error as ResolveError;
pub use psclient_store::StoreError;

// Configuration
pub use psclient_config::{Config, ConfigLoader, OutputFormat, Settings};

// Stores
pub use psclient_store::{Credentials, MemoryStore, SsmStore};
