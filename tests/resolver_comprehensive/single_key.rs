//! Single-key resolution.

use psclient::ResolveError;
use psclient_core::Resolver;

use crate::three_versions;

// =============================================================================
// CURRENT VALUE
// =============================================================================

#[test]
fn no_version_returns_current_without_history() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let p = resolver.resolve("/app/K", None).unwrap();

    assert_eq!(p.value, "c");
    assert_eq!(p.version, 3);
    assert_eq!(store.gets(), 1);
    assert_eq!(store.histories(), 0);
}

#[test]
fn empty_version_text_means_current() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let p = resolver.resolve("/app/K", Some("")).unwrap();

    assert_eq!(p.version, 3);
    assert_eq!(store.histories(), 0);
}

#[test]
fn current_version_skips_history() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let p = resolver.resolve("/app/K", Some("3")).unwrap();

    assert_eq!((p.value.as_str(), p.version), ("c", 3));
    assert_eq!(store.histories(), 0);
}

// =============================================================================
// HISTORICAL VERSIONS
// =============================================================================

#[test]
fn older_version_comes_from_history() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let p = resolver.resolve("/app/K", Some("1")).unwrap();

    assert_eq!(p.name, "/app/K");
    assert_eq!(p.kind, "String");
    assert_eq!(p.value, "a");
    assert_eq!(p.version, 1);
}

#[test]
fn history_scan_stops_at_the_match() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    resolver.resolve("/app/K", Some("2")).unwrap();

    // one entry per page: version 2 is on the second page
    assert_eq!(store.histories(), 2);
}

#[test]
fn missing_version_scans_every_page() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let err = resolver.resolve("/app/K", Some("99")).unwrap_err();

    match &err {
        ResolveError::VersionNotFound { version, key } => {
            assert_eq!(*version, 99);
            assert_eq!(key, "/app/K");
        }
        other => panic!("expected VersionNotFound, got {:?}", other),
    }
    assert!(err.to_string().contains("99"));
    assert!(err.to_string().contains("/app/K"));
    assert_eq!(store.histories(), 3);
}

// =============================================================================
// INPUT ERRORS
// =============================================================================

#[test]
fn malformed_version_makes_no_calls() {
    for bad in ["abc", "1.5", " 2", "0x10", "99999999999999999999"] {
        let store = three_versions();
        let resolver = Resolver::new(&store);

        let err = resolver.resolve("/app/K", Some(bad)).unwrap_err();

        assert!(matches!(err, ResolveError::Parse { .. }), "input {:?}", bad);
        assert!(err.is_input_error());
        assert_eq!(store.total(), 0, "input {:?}", bad);
    }
}

#[test]
fn empty_key_is_rejected_before_any_call() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let err = resolver.resolve("", None).unwrap_err();

    assert!(matches!(err, ResolveError::InvalidKey(_)));
    assert_eq!(store.total(), 0);
}

#[test]
fn unknown_key_is_a_transport_error() {
    let store = three_versions();
    let resolver = Resolver::new(&store);

    let err = resolver.resolve("/app/missing", Some("1")).unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.is_version_not_found());
    assert!(err.transport().is_some());
    assert_eq!(store.histories(), 0);
}
