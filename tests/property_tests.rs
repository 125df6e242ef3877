//! Property-based tests for the reader and container

use proptest::prelude::*;
use rapid_ini::{parse, IniContainer, Properties};

/// Arbitrary text built from the characters the reader cares about
fn ini_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('['),
            Just(']'),
            Just('='),
            Just(';'),
            Just('.'),
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\r'),
            prop::char::range('a', 'e'),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.]{0,8}"
}

fn properties_strategy() -> impl Strategy<Value = Properties> {
    prop::collection::btree_map(key_strategy(), "[a-z0-9 ]{0,8}", 0..8)
}

proptest! {
    #[test]
    fn test_parse_is_deterministic(text in ini_text_strategy()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn test_round_trip_through_ini_text(text in ini_text_strategy()) {
        let container = IniContainer::from(parse(&text));
        let rendered = container.to_ini_string().unwrap();
        prop_assert_eq!(&parse(&rendered), container.properties(), "rendered: {:?}", rendered);
    }

    #[test]
    fn test_get_value_or_matches_key_exists(
        properties in properties_strategy(),
        key in key_strategy(),
        fallback in "[a-z]{0,4}",
    ) {
        let container = IniContainer::from(properties);
        let value = container.get_value_or(&key, &fallback);
        if container.key_exists(&key) {
            prop_assert_eq!(value, container.get_value(&key).unwrap());
        } else {
            prop_assert_eq!(value, fallback.as_str());
        }
    }

    #[test]
    fn test_empty_section_lookup_is_bare_lookup(
        properties in properties_strategy(),
        key in key_strategy(),
    ) {
        let container = IniContainer::from(properties);
        prop_assert_eq!(
            container.get_section_value("", &key).ok(),
            container.get_value(&key).ok()
        );
    }

    #[test]
    fn test_import_is_idempotent(properties in properties_strategy()) {
        let mut container = IniContainer::from(properties);
        let before = container.clone();
        container.import_properties(container.properties().clone());
        prop_assert_eq!(container, before);
    }
}
