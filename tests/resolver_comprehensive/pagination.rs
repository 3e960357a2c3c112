//! Draining paginated listings and histories.

use std::collections::HashSet;

use proptest::prelude::*;
use psclient_core::Resolver;

use crate::{many_keys, CountingStore};

#[test]
fn three_pages_of_two_yield_six_entries() {
    let store = CountingStore::new(many_keys(6, 2));
    let resolver = Resolver::new(&store);

    let set = resolver.resolve_tree("/app/", true, None).unwrap();

    assert_eq!(set.len(), 6);
    let unique: HashSet<&str> = set.names().into_iter().collect();
    assert_eq!(unique.len(), 6);
    assert_eq!(store.listings(), 3);
}

#[test]
fn listing_order_is_preserved_across_pages() {
    let resolver = Resolver::new(many_keys(5, 2));

    let set = resolver.resolve_tree("/app/", true, None).unwrap();

    let expected: Vec<String> = (0..5).map(|i| format!("/app/KEY{:02}", i)).collect();
    assert_eq!(set.names(), expected);
}

#[test]
fn deep_history_is_followed_across_pages() {
    let mut inner = psclient::MemoryStore::new().with_page_size(2);
    for i in 1..=9 {
        inner.put("/app/K", format!("v{}", i));
    }
    let store = CountingStore::new(inner);
    let resolver = Resolver::new(&store);

    let p = resolver.resolve("/app/K", Some("7")).unwrap();

    assert_eq!(p.value, "v7");
    assert_eq!(store.histories(), 4);
}

proptest! {
    #[test]
    fn every_listed_key_is_resolved_once(count in 0usize..40, page_size in 1usize..8) {
        let store = CountingStore::new(many_keys(count, page_size));
        let resolver = Resolver::new(&store);

        let set = resolver.resolve_tree("/app/", true, None).unwrap();

        prop_assert_eq!(set.len(), count);
        let unique: HashSet<&str> = set.names().into_iter().collect();
        prop_assert_eq!(unique.len(), count);
        let pages = if count == 0 { 1 } else { (count + page_size - 1) / page_size };
        prop_assert_eq!(store.listings(), pages);
    }
}
