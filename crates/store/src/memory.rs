//! In-memory parameter store.
//!
//! Keeps every version of every key and answers the three transport calls the
//! way SSM does:
//! - keys are listed in name order
//! - a non-recursive listing returns only direct children of the path
//! - listings and histories are paged, with opaque offset tokens
//!
//! A store can also be loaded from a JSON snapshot:
//!
//! ```json
//! {
//!   "parameters": [
//!     { "name": "/app/DB_HOST", "type": "String", "values": ["old", "new"] }
//!   ]
//! }
//! ```
//!
//! `values` lists every version oldest first; version numbers start at 1.

use std::collections::BTreeMap;
use std::path::Path;

use psclient_core::{
    HistoryEntry, Page, Parameter, ParameterStore, TransportError, TransportResult, Version,
    PARAMETER_NOT_FOUND,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Page size SSM uses for path listings.
pub const DEFAULT_PAGE_SIZE: usize = 10;

const DEFAULT_KIND: &str = "String";

#[derive(Debug, Clone)]
struct Entry {
    kind: String,
    /// Oldest first; entry `i` holds version `i + 1`
    history: Vec<HistoryEntry>,
}

impl Entry {
    fn current(&self, name: &str) -> Option<Parameter> {
        self.history
            .last()
            .map(|h| Parameter::new(name, self.kind.clone(), h.value.clone(), h.version))
    }
}

/// Parameter store held entirely in memory.
///
/// # Example
///
/// ```ignore
/// let mut store = MemoryStore::new().with_page_size(2);
/// store.put("/app/A", "one");
/// store.put("/app/A", "two");
///
/// let current = store.get_parameter("/app/A")?;
/// assert_eq!(current.version, 2);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Entry>,
    page_size: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the number of items returned per page. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Write a new `String` version of a key. Returns the new version.
    pub fn put(&mut self, name: &str, value: impl Into<String>) -> Version {
        self.put_typed(name, DEFAULT_KIND, value)
    }

    /// Write a new version of a key with an explicit type tag.
    ///
    /// The type of an existing key is overwritten, as SSM does.
    pub fn put_typed(&mut self, name: &str, kind: &str, value: impl Into<String>) -> Version {
        let entry = self.entries.entry(name.to_string()).or_insert_with(|| Entry {
            kind: kind.to_string(),
            history: Vec::new(),
        });
        entry.kind = kind.to_string();
        let version = entry.history.len() as Version + 1;
        entry.history.push(HistoryEntry::new(version, value));
        version
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a store from a JSON snapshot file.
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading snapshot from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_snapshot_str(&raw)
    }

    /// Load a store from JSON snapshot text.
    pub fn from_snapshot_str(raw: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        let mut store = Self::new();
        for param in snapshot.parameters {
            if param.name.is_empty() {
                return Err(StoreError::Snapshot("parameter with empty name".into()));
            }
            if param.values.is_empty() {
                return Err(StoreError::Snapshot(format!(
                    "parameter {} has no values",
                    param.name
                )));
            }
            for value in param.values {
                store.put_typed(&param.name, &param.kind, value);
            }
        }
        Ok(store)
    }

    fn entry(&self, name: &str) -> TransportResult<&Entry> {
        self.entries.get(name).ok_or_else(|| {
            TransportError::service(PARAMETER_NOT_FOUND, format!("parameter {} not found", name))
        })
    }

    /// Cut one page out of `items` starting at `token`.
    fn page_of<T: Clone>(&self, items: &[T], token: Option<&str>) -> TransportResult<Page<T>> {
        let start = match token {
            None => 0,
            Some(t) => t
                .parse::<usize>()
                .ok()
                .filter(|offset| *offset <= items.len())
                .ok_or_else(|| {
                    TransportError::service("InvalidNextToken", format!("invalid token {:?}", t))
                })?,
        };
        let end = (start + self.page_size).min(items.len());
        let chunk = items[start..end].to_vec();
        if end < items.len() {
            Ok(Page::with_next(chunk, end.to_string()))
        } else {
            Ok(Page::last(chunk))
        }
    }
}

/// Whether `name` lies under `path` (directly, unless `recursive`).
fn under_path(name: &str, path: &str, recursive: bool) -> bool {
    let prefix = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };
    match name.strip_prefix(prefix.as_str()) {
        Some(rest) if !rest.is_empty() => recursive || !rest.contains('/'),
        _ => false,
    }
}

impl ParameterStore for MemoryStore {
    fn get_parameter(&self, name: &str) -> TransportResult<Parameter> {
        let entry = self.entry(name)?;
        entry.current(name).ok_or_else(|| {
            TransportError::service(PARAMETER_NOT_FOUND, format!("parameter {} not found", name))
        })
    }

    fn parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        token: Option<&str>,
    ) -> TransportResult<Page<Parameter>> {
        let matching: Vec<Parameter> = self
            .entries
            .iter()
            .filter(|(name, _)| under_path(name, path, recursive))
            .filter_map(|(name, entry)| entry.current(name))
            .collect();
        self.page_of(&matching, token)
    }

    fn parameter_history(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> TransportResult<Page<HistoryEntry>> {
        let entry = self.entry(name)?;
        self.page_of(&entry.history, token)
    }
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    parameters: Vec<SnapshotParameter>,
}

#[derive(Debug, Deserialize)]
struct SnapshotParameter {
    name: String,
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    values: Vec<String>,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}
