//! Property-based tests for path resolution.
//!
//! Uses proptest to generate arbitrary segments and check the rules that must
//! hold whatever the segment text is.

use crate::common::{ENTITY, embedded_registry, widget_registry};
use prop_registry::schema::is_index_segment;
use proptest::prelude::*;

fn index_segment() -> impl Strategy<Value = String> {
    "[0-9]{1,6}"
}

fn any_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9_-]{0,12}",
        index_segment(),
        ".{0,8}",
    ]
}

fn any_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any_segment(), 0..8)
}

proptest! {
    #[test]
    fn resolution_is_repeatable(path in any_path()) {
        let registry = widget_registry();
        let first = registry.find_prop(&path).cloned();
        prop_assert_eq!(registry.find_prop(&path).cloned(), first);
    }

    #[test]
    fn single_segment_never_resolves(segment in any_segment()) {
        let registry = embedded_registry();
        prop_assert!(registry.find_prop(&[segment]).is_none());
    }

    #[test]
    fn unregistered_entity_type_never_resolves(rest in prop::collection::vec(any_segment(), 0..6)) {
        let registry = widget_registry();
        let mut path = vec!["notRegistered".to_string()];
        path.extend(rest);
        prop_assert!(registry.find_prop(&path).is_none());
    }

    #[test]
    fn array_index_is_elidable(index in index_segment()) {
        let registry = widget_registry();
        let elided = registry.find_prop(&[ENTITY, "items", "price"]);
        let indexed = registry.find_prop(&[ENTITY, "items", index.as_str(), "price"]);
        prop_assert!(elided.is_some());
        prop_assert_eq!(elided, indexed);
    }

    #[test]
    fn map_key_is_elidable(key in any_segment()) {
        let registry = widget_registry();
        let elided = registry.find_prop(&[ENTITY, "entries", "x"]);
        let keyed = registry.find_prop(&[ENTITY, "entries", key.as_str(), "x"]);
        prop_assert!(elided.is_some());
        prop_assert_eq!(elided, keyed);
    }

    #[test]
    fn absent_prefix_stays_absent(rest in prop::collection::vec(any_segment(), 0..6)) {
        let registry = widget_registry();
        let mut path = vec![ENTITY.to_string(), "doesNotExist".to_string()];
        path.extend(rest);
        prop_assert!(registry.find_prop(&path).is_none());
    }

    #[test]
    fn digit_strings_are_index_segments(index in index_segment()) {
        prop_assert!(is_index_segment(&index));
    }

    #[test]
    fn strings_with_a_non_digit_are_not_index_segments(
        prefix in "[0-9]{0,3}",
        other in "[^0-9]",
        suffix in "[0-9]{0,3}"
    ) {
        let segment = format!("{}{}{}", prefix, other, suffix);
        prop_assert!(!is_index_segment(&segment));
    }
}
