//! Convenient imports for psclient.
//!
//! ```ignore
//! use psclient::prelude::*;
//!
//! let client = Client::from_config(&ConfigLoader::new().load()?)?;
//! let param = client.get("/app/DB_HOST", None)?;
//! ```

// Main entry point
pub use crate::client::{Client, ClientBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Result values
pub use crate::types::{Parameter, ParameterSet, Version};

// Configuration
pub use crate::types::{Config, ConfigLoader, OutputFormat};

// Stores
pub use crate::types::{Credentials, MemoryStore, ParameterStore};
