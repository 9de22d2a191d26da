mod common;

use std::collections::HashSet;

use common::sample_options;
use proptest::prelude::*;
use sqlcaret_core::{CompletionItemKind, MySqlAutocomplete};

fn rank(kind: CompletionItemKind) -> u8 {
    match kind {
        CompletionItemKind::Keyword => 0,
        CompletionItemKind::Column => 1,
        CompletionItemKind::Table => 2,
    }
}

fn statement_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("SELECT".to_string()),
            Just("FROM".to_string()),
            Just("WHERE".to_string()),
            Just("users".to_string()),
            Just("orders".to_string()),
            Just("shop.orders".to_string()),
            Just("u.".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just(",".to_string()),
            Just(";".to_string()),
            Just("=".to_string()),
            Just("'txt".to_string()),
            Just("ALTER TABLE".to_string()),
            Just("MODIFY".to_string()),
            Just("JOIN".to_string()),
            Just("ON".to_string()),
            "[a-z]{1,6}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn completion_is_unique_ordered_and_idempotent(
        sql in statement_fragment(),
        offset in 0usize..120,
    ) {
        let engine = MySqlAutocomplete::new(sample_options());

        let first = engine.autocomplete(&sql, offset).unwrap();
        let second = engine.autocomplete(&sql, offset).unwrap();
        prop_assert_eq!(&first, &second);

        let mut seen = HashSet::new();
        for item in &first {
            prop_assert!(seen.insert((item.text.clone(), item.kind)), "duplicate {:?}", item);
        }

        let ranks: Vec<u8> = first.iter().map(|item| rank(item.kind)).collect();
        prop_assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]), "unordered {:?}", first);
        prop_assert!(first.iter().all(|item| !item.text.contains("NOT2")));
    }

    #[test]
    fn arbitrary_text_never_fails_within_bounds(sql in "\\PC{0,80}", offset in 0usize..100) {
        let engine = MySqlAutocomplete::default();
        prop_assert!(engine.autocomplete(&sql, offset).is_ok());
    }
}
