//! Core types for parameter resolution
//!
//! This module defines the values that flow between the transport and the
//! resolver:
//! - [`Parameter`]: a resolved name/type/value/version record
//! - [`ParameterSet`]: the ordered result of a path query
//! - [`HistoryEntry`]: one historical version of a key
//! - [`Page`]: one page of a paginated backend listing

use serde::{Deserialize, Serialize};

/// Backend-assigned version number.
///
/// Versions start at 1 and increase by one on every write to a key.
pub type Version = i64;

/// A resolved parameter value.
///
/// `version` is always the version that supplied `value`. The resolver never
/// pairs a historical value with the current version number or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Fully-qualified key, e.g. `/app/prod/DB_HOST`
    pub name: String,
    /// Backend data type tag (`String`, `SecureString`, `StringList`)
    #[serde(rename = "type")]
    pub kind: String,
    /// The value, decrypted when the backend supports it
    pub value: String,
    /// Version that supplied `value`
    pub version: Version,
}

impl Parameter {
    /// Create a parameter record.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        value: impl Into<String>,
        version: Version,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            value: value.into(),
            version,
        }
    }

    /// Replace value and version with a historical entry.
    ///
    /// Name and type are kept from the current record.
    pub fn pinned_to(self, entry: HistoryEntry) -> Self {
        Self {
            value: entry.value,
            version: entry.version,
            ..self
        }
    }

    /// Last segment of the hierarchical name (`/app/prod/DB_HOST` -> `DB_HOST`).
    pub fn base_name(&self) -> &str {
        let trimmed = self.name.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => trimmed,
        }
    }
}

/// Ordered parameters produced by a path query.
///
/// Order follows backend enumeration order; it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Vec<Parameter>);

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    /// Look up a parameter by its full name.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name == name)
    }

    /// Names in enumeration order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }

    pub(crate) fn push(&mut self, parameter: Parameter) {
        self.0.push(parameter);
    }
}

impl From<Vec<Parameter>> for ParameterSet {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }
}

impl IntoIterator for ParameterSet {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One historical version of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Version number of this entry
    pub version: Version,
    /// Value written at this version
    pub value: String,
}

impl HistoryEntry {
    /// Create a history entry.
    pub fn new(version: Version, value: impl Into<String>) -> Self {
        Self {
            version,
            value: value.into(),
        }
    }
}

/// One page of a paginated listing.
///
/// A page without a continuation token is the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in backend order
    pub items: Vec<T>,
    /// Opaque token for the following page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A final page.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    /// A page followed by more pages.
    pub fn with_next(items: Vec<T>, token: impl Into<String>) -> Self {
        Self {
            items,
            next_token: Some(token.into()),
        }
    }

    /// Whether no further pages follow.
    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}
