//! Resolver Comprehensive Test Suite
//!
//! Exercises version resolution end to end against the in-memory store,
//! counting every backend call so the number of round trips can be asserted.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test resolver_comprehensive
//!
//! # Run path query tests only
//! cargo test --test resolver_comprehensive path_tree::
//! ```

use std::cell::Cell;

use psclient::{
    HistoryEntry, MemoryStore, Page, Parameter, ParameterStore, TransportError, TransportResult,
};

// Test modules
pub mod client;
pub mod pagination;
pub mod path_tree;
pub mod single_key;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// A [`MemoryStore`] that counts the calls made to it.
///
/// Can be told to fail the n-th listing or history call (1-based) with a
/// connection error.
pub struct CountingStore {
    inner: MemoryStore,
    gets: Cell<usize>,
    listings: Cell<usize>,
    histories: Cell<usize>,
    fail_listing: Option<usize>,
    fail_history: Option<usize>,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            gets: Cell::new(0),
            listings: Cell::new(0),
            histories: Cell::new(0),
            fail_listing: None,
            fail_history: None,
        }
    }

    pub fn failing_listing_call(mut self, call: usize) -> Self {
        self.fail_listing = Some(call);
        self
    }

    pub fn failing_history_call(mut self, call: usize) -> Self {
        self.fail_history = Some(call);
        self
    }

    pub fn gets(&self) -> usize {
        self.gets.get()
    }

    pub fn listings(&self) -> usize {
        self.listings.get()
    }

    pub fn histories(&self) -> usize {
        self.histories.get()
    }

    pub fn total(&self) -> usize {
        self.gets() + self.listings() + self.histories()
    }
}

impl ParameterStore for CountingStore {
    fn get_parameter(&self, name: &str) -> TransportResult<Parameter> {
        self.gets.set(self.gets.get() + 1);
        self.inner.get_parameter(name)
    }

    fn parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        token: Option<&str>,
    ) -> TransportResult<Page<Parameter>> {
        self.listings.set(self.listings.get() + 1);
        if self.fail_listing == Some(self.listings.get()) {
            return Err(connection_lost());
        }
        self.inner.parameters_by_path(path, recursive, token)
    }

    fn parameter_history(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> TransportResult<Page<HistoryEntry>> {
        self.histories.set(self.histories.get() + 1);
        if self.fail_history == Some(self.histories.get()) {
            return Err(connection_lost());
        }
        self.inner.parameter_history(name, token)
    }
}

/// The error returned by an injected failure.
pub fn connection_lost() -> TransportError {
    TransportError::Connection("connection reset by peer".into())
}

/// `/app/K` with history `{1: "a", 2: "b", 3: "c"}`, one history entry per page.
pub fn three_versions() -> CountingStore {
    let mut store = MemoryStore::new().with_page_size(1);
    for value in ["a", "b", "c"] {
        store.put("/app/K", value);
    }
    CountingStore::new(store)
}

/// `/app/A` at version 1 and `/app/B` at version 2.
pub fn two_keys() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.put("/app/A", "a1");
    store.put("/app/B", "b1");
    store.put("/app/B", "b2");
    store
}

/// `count` keys under `/app/`, each with a single version, listed `page_size` at a time.
pub fn many_keys(count: usize, page_size: usize) -> MemoryStore {
    let mut store = MemoryStore::new().with_page_size(page_size);
    for i in 0..count {
        store.put(&format!("/app/KEY{:02}", i), format!("value-{}", i));
    }
    store
}
