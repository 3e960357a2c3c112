//! Version resolution for single keys and path subtrees.
//!
//! ## Resolution policy
//!
//! | Requested version | Action |
//! |-------------------|--------|
//! | none | return the current value |
//! | equal to current | return the current value, no history call |
//! | anything else | scan the key's history until the version is found |
//!
//! A path query applies the same policy to every listed key. The first key
//! that fails aborts the whole query; partial results are never returned.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::paging::{drain_pages, find_in_pages};
use crate::store::ParameterStore;
use crate::types::{Parameter, ParameterSet, Version};

/// Parse optional version text.
///
/// `None` and the empty string both mean "no version requested". Anything
/// else must be a base-10 64-bit integer.
pub fn parse_version(text: Option<&str>) -> Result<Option<Version>> {
    match text {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<Version>()
            .map(Some)
            .map_err(|source| Error::Parse {
                input: raw.to_string(),
                source,
            }),
    }
}

fn require_non_empty(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidKey(format!("{} must not be empty", what)));
    }
    Ok(())
}

/// Resolves keys and subtrees against a [`ParameterStore`].
///
/// The resolver holds nothing but the store handle; every call builds its
/// result from scratch.
///
/// # Example
///
/// ```ignore
/// let resolver = Resolver::new(store);
///
/// let current = resolver.resolve("/app/DB_HOST", None)?;
/// let pinned = resolver.resolve("/app/DB_HOST", Some("3"))?;
/// let tree = resolver.resolve_tree("/app/", true, Some("3"))?;
/// ```
pub struct Resolver<S> {
    store: S,
}

impl<S: ParameterStore> Resolver<S> {
    /// Create a resolver over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve a single key, optionally pinned to `version`.
    ///
    /// ## Errors
    ///
    /// - `InvalidKey` if `key` is empty
    /// - `Parse` if `version` is not an integer (no backend call is made)
    /// - `Transport` if a backend call fails
    /// - `VersionNotFound` if the version is not in the key's history
    pub fn resolve(&self, key: &str, version: Option<&str>) -> Result<Parameter> {
        require_non_empty("key", key)?;
        let requested = parse_version(version)?;

        debug!(key, "fetching parameter");
        let current = self.store.get_parameter(key)?;
        let resolved = self.pin(current, requested)?;

        info!(key, version = resolved.version, "resolved parameter");
        Ok(resolved)
    }

    /// Resolve every key under `path`, each pinned to `version`.
    ///
    /// The listing is fully drained before any version is resolved. Keys keep
    /// the order the backend listed them in.
    ///
    /// ## Errors
    ///
    /// Same as [`Resolver::resolve`]. One key failing fails the whole query.
    pub fn resolve_tree(
        &self,
        path: &str,
        recursive: bool,
        version: Option<&str>,
    ) -> Result<ParameterSet> {
        require_non_empty("path", path)?;
        let requested = parse_version(version)?;

        let listed = drain_pages(|token| {
            debug!(path, recursive, ?token, "listing parameters by path");
            self.store.parameters_by_path(path, recursive, token)
        })?;
        debug!(path, count = listed.len(), "listing complete");

        let mut resolved = ParameterSet::new();
        for current in listed {
            resolved.push(self.pin(current, requested)?);
        }

        info!(path, count = resolved.len(), "resolved parameter tree");
        Ok(resolved)
    }

    /// Apply the version policy to one freshly fetched parameter.
    fn pin(&self, current: Parameter, requested: Option<Version>) -> Result<Parameter> {
        let wanted = match requested {
            Some(v) if v != current.version => v,
            _ => return Ok(current),
        };

        debug!(
            key = %current.name,
            current = current.version,
            wanted,
            "scanning history"
        );
        let found = find_in_pages(
            |token| self.store.parameter_history(&current.name, token),
            |entry| entry.version == wanted,
        )?;

        match found {
            Some(entry) => Ok(current.pinned_to(entry)),
            None => Err(Error::VersionNotFound {
                version: wanted,
                key: current.name,
            }),
        }
    }
}
