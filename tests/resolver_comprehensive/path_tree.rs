//! Path subtree resolution.

use psclient::{MemoryStore, ResolveError};
use psclient_core::Resolver;

use crate::{connection_lost, many_keys, two_keys, CountingStore};

// =============================================================================
// AGGREGATION
// =============================================================================

#[test]
fn path_returns_every_key_at_current_version() {
    let store = CountingStore::new(two_keys());
    let resolver = Resolver::new(&store);

    let set = resolver.resolve_tree("/app/", true, None).unwrap();

    assert_eq!(set.names(), vec!["/app/A", "/app/B"]);
    assert_eq!(set.get("/app/A").unwrap().version, 1);
    assert_eq!(set.get("/app/B").unwrap().version, 2);
    assert_eq!(set.get("/app/B").unwrap().value, "b2");
    assert_eq!(store.histories(), 0);
}

#[test]
fn path_without_trailing_slash_matches_the_same_keys() {
    let resolver = Resolver::new(two_keys());

    let set = resolver.resolve_tree("/app", true, None).unwrap();

    assert_eq!(set.len(), 2);
}

#[test]
fn empty_path_yields_empty_set() {
    let store = CountingStore::new(two_keys());
    let resolver = Resolver::new(&store);

    let set = resolver.resolve_tree("/nothing/here/", true, Some("4")).unwrap();

    assert!(set.is_empty());
    assert_eq!(store.listings(), 1);
    assert_eq!(store.histories(), 0);
}

#[test]
fn recursion_flag_is_passed_to_the_backend() {
    let mut inner = two_keys();
    inner.put("/app/nested/C", "c1");
    let resolver = Resolver::new(inner);

    let flat = resolver.resolve_tree("/app/", false, None).unwrap();
    let deep = resolver.resolve_tree("/app/", true, None).unwrap();

    assert_eq!(flat.names(), vec!["/app/A", "/app/B"]);
    assert_eq!(deep.names(), vec!["/app/A", "/app/B", "/app/nested/C"]);
}

// =============================================================================
// VERSION PINNING
// =============================================================================

#[test]
fn each_key_is_pinned_independently() {
    let mut inner = MemoryStore::new();
    for i in 1..=3 {
        inner.put("/app/A", format!("a{}", i));
        inner.put("/app/B", format!("b{}", i));
    }
    inner.put("/app/B", "b4");
    let store = CountingStore::new(inner);
    let resolver = Resolver::new(&store);

    let set = resolver.resolve_tree("/app/", true, Some("3")).unwrap();

    assert_eq!(set.get("/app/A").unwrap().value, "a3");
    assert_eq!(set.get("/app/B").unwrap().value, "b3");
    // A is already at 3, only B needs its history
    assert_eq!(store.histories(), 1);
}

#[test]
fn one_missing_version_fails_the_whole_query() {
    let mut inner = MemoryStore::new();
    for i in 1..=5 {
        inner.put("/app/A", format!("a{}", i));
    }
    inner.put("/app/B", "b1");
    inner.put("/app/B", "b2");
    let resolver = Resolver::new(inner);

    let err = resolver.resolve_tree("/app/", true, Some("5")).unwrap_err();

    match err {
        ResolveError::VersionNotFound { version, key } => {
            assert_eq!(version, 5);
            assert_eq!(key, "/app/B");
        }
        other => panic!("expected VersionNotFound, got {:?}", other),
    }
}

#[test]
fn malformed_version_on_path_makes_no_calls() {
    let store = CountingStore::new(two_keys());
    let resolver = Resolver::new(&store);

    let err = resolver.resolve_tree("/app/", true, Some("v2")).unwrap_err();

    assert!(matches!(err, ResolveError::Parse { .. }));
    assert_eq!(store.total(), 0);
}

// =============================================================================
// TRANSPORT FAILURES
// =============================================================================

#[test]
fn failure_on_later_listing_page_aborts_the_query() {
    let store = CountingStore::new(many_keys(6, 2)).failing_listing_call(2);
    let resolver = Resolver::new(&store);

    let err = resolver.resolve_tree("/app/", true, None).unwrap_err();

    assert_eq!(err.transport(), Some(&connection_lost()));
    assert_eq!(store.listings(), 2);
    assert_eq!(store.histories(), 0);
}

#[test]
fn failure_on_history_page_aborts_the_query() {
    let mut inner = MemoryStore::new().with_page_size(1);
    for i in 1..=3 {
        inner.put("/app/A", format!("a{}", i));
        inner.put("/app/B", format!("b{}", i));
    }
    let store = CountingStore::new(inner).failing_history_call(2);
    let resolver = Resolver::new(&store);

    // A finds version 1 on its first history page; B fails on its first
    let err = resolver.resolve_tree("/app/", true, Some("1")).unwrap_err();

    assert!(matches!(err, ResolveError::Transport(_)));
    assert_eq!(err.transport(), Some(&connection_lost()));
    assert!(!err.is_version_not_found());
    assert_eq!(store.histories(), 2);
}

#[test]
fn failure_mid_history_scan_is_not_reported_as_missing_version() {
    let mut inner = MemoryStore::new().with_page_size(1);
    for i in 1..=4 {
        inner.put("/app/A", format!("a{}", i));
    }
    let store = CountingStore::new(inner).failing_history_call(2);
    let resolver = Resolver::new(&store);

    let err = resolver.resolve_tree("/app/", true, Some("3")).unwrap_err();

    assert_eq!(err.transport(), Some(&connection_lost()));
    assert_eq!(store.histories(), 2);
}
