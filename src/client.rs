//! Main client entry point.
//!
//! This module provides the `Client` struct, the primary entry point for
//! reading parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use psclient_core::Resolver;
use tracing::debug;

use crate::error::Result;
use crate::types::{
    Config, Credentials, MemoryStore, Parameter, ParameterSet, ParameterStore, SsmStore,
};

/// Program name shown by [`Client::version`].
pub const APPLICATION_NAME: &str = "aws-ps-client";

/// The parameter store client.
///
/// Holds one store handle for the life of the process and resolves keys and
/// paths against it. Create one with [`Client::from_config`],
/// [`Client::builder`] or [`Client::with_store`].
///
/// # Example
///
/// ```ignore
/// use psclient::prelude::*;
///
/// let config = ConfigLoader::new().load()?;
/// let client = Client::from_config(&config)?;
///
/// let host = client.get("/app/prod/DB_HOST", None)?;
/// let previous = client.get("/app/prod/DB_HOST", Some("3"))?;
/// let all = client.get_path("/app/prod/", true, None)?;
/// ```
pub struct Client {
    resolver: Resolver<Box<dyn ParameterStore>>,
}

impl Client {
    /// Connect to SSM with the region and credentials in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder().config(config)?.build()
    }

    /// Create a builder for client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Use an arbitrary store, e.g. a [`MemoryStore`] in tests.
    pub fn with_store(store: impl ParameterStore + 'static) -> Self {
        Self {
            resolver: Resolver::new(Box::new(store)),
        }
    }

    /// Get one key, optionally at a given version.
    ///
    /// `version` is the version as text; `None` or `""` means current.
    pub fn get(&self, key: &str, version: Option<&str>) -> Result<Parameter> {
        Ok(self.resolver.resolve(key, version)?)
    }

    /// Get every key under `path`, each at the given version.
    ///
    /// Fails as a whole if any single key lacks that version.
    pub fn get_path(
        &self,
        path: &str,
        recursive: bool,
        version: Option<&str>,
    ) -> Result<ParameterSet> {
        Ok(self.resolver.resolve_tree(path, recursive, version)?)
    }

    /// Program name and version, e.g. `aws-ps-client ver. 0.1.0`.
    pub fn version() -> String {
        format!("{} ver. {}", APPLICATION_NAME, env!("CARGO_PKG_VERSION"))
    }
}

/// Builder for client configuration.
///
/// # Example
///
/// ```ignore
/// // AWS
/// let client = Client::builder()
///     .region("us-west-2")
///     .credentials(Credentials::new(key, secret))
///     .build()?;
///
/// // Offline, from a JSON snapshot
/// let client = Client::builder().snapshot("./params.json").build()?;
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    region: Option<String>,
    credentials: Option<Credentials>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    snapshot: Option<PathBuf>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take region and credentials from a loaded [`Config`].
    ///
    /// Fails if the access key or secret is missing.
    pub fn config(self, config: &Config) -> Result<Self> {
        config.require_credentials()?;
        Ok(self.region(config.aws_region.clone()).credentials(Credentials::new(
            config.aws_access_key.clone(),
            config.aws_access_secret.clone(),
        )))
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set static credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the SSM endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read from a JSON snapshot file instead of AWS.
    ///
    /// When set, region, credentials and endpoint are ignored.
    pub fn snapshot(mut self, path: impl AsRef<Path>) -> Self {
        self.snapshot = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if let Some(path) = self.snapshot {
            debug!("using snapshot store {}", path.display());
            return Ok(Client::with_store(MemoryStore::from_snapshot_file(path)?));
        }

        let mut store = SsmStore::builder();
        if let Some(region) = self.region {
            store = store.region(region);
        }
        if let Some(credentials) = self.credentials {
            store = store.credentials(credentials);
        }
        if let Some(endpoint) = self.endpoint {
            store = store.endpoint(endpoint);
        }
        if let Some(timeout) = self.timeout {
            store = store.timeout(timeout);
        }
        let store = store.build()?;
        debug!(endpoint = store.endpoint(), "using SSM store");
        Ok(Client::with_store(store))
    }
}
