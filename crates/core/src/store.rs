//! Transport contract consumed by the resolver.

use crate::error::TransportError;
use crate::types::{HistoryEntry, Page, Parameter};

/// Result of a single backend call.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Read-only access to a remote parameter store.
///
/// Implementations perform exactly one backend call per method invocation.
/// Pagination is driven by the caller through the opaque `token` returned in
/// [`Page::next_token`]; `None` requests the first page.
pub trait ParameterStore {
    /// Fetch the current value and version of a key.
    fn get_parameter(&self, name: &str) -> TransportResult<Parameter>;

    /// Fetch one page of the values stored under `path`.
    ///
    /// When `recursive` is false only direct children of `path` are listed.
    fn parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        token: Option<&str>,
    ) -> TransportResult<Page<Parameter>>;

    /// Fetch one page of a key's version history.
    fn parameter_history(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> TransportResult<Page<HistoryEntry>>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for &S {
    fn get_parameter(&self, name: &str) -> TransportResult<Parameter> {
        (**self).get_parameter(name)
    }

    fn parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        token: Option<&str>,
    ) -> TransportResult<Page<Parameter>> {
        (**self).parameters_by_path(path, recursive, token)
    }

    fn parameter_history(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> TransportResult<Page<HistoryEntry>> {
        (**self).parameter_history(name, token)
    }
}

impl<S: ParameterStore + ?Sized> ParameterStore for Box<S> {
    fn get_parameter(&self, name: &str) -> TransportResult<Parameter> {
        (**self).get_parameter(name)
    }

    fn parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        token: Option<&str>,
    ) -> TransportResult<Page<Parameter>> {
        (**self).parameters_by_path(path, recursive, token)
    }

    fn parameter_history(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> TransportResult<Page<HistoryEntry>> {
        (**self).parameter_history(name, token)
    }
}
