mod common;

use std::time::{Duration, Instant};

use common::{at_cursor, complete, sample_options, texts};
use rstest::rstest;
use sqlcaret_core::{
    AutocompleteOptions, CompletionError, CompletionItem, CompletionItemKind, MySqlAutocomplete,
    OffsetPolicy, ParserOptions, ServerVersion, SqlMode,
};

fn engine() -> MySqlAutocomplete {
    MySqlAutocomplete::new(sample_options())
}

#[test]
fn keywords_only_without_schema() {
    let items = MySqlAutocomplete::default().autocomplete("SELEC", 5).unwrap();
    assert!(!items.is_empty());
    assert!(items
        .iter()
        .all(|item| item.kind == CompletionItemKind::Keyword));
    assert!(items.contains(&CompletionItem::keyword("SELECT")));
}

#[test]
fn table_position_offers_catalog_tables_with_clamped_offset() {
    let items = engine().autocomplete("SELECT * FROM us", 17).unwrap();
    assert_eq!(texts(&items, CompletionItemKind::Table), vec!["users", "orders"]);
}

#[rstest]
#[case::select_list("SELECT nam FROM users", 9)]
#[case::where_clause("SELECT * FROM users WHERE nam", 28)]
fn column_positions_offer_columns_of_table_in_scope(#[case] sql: &str, #[case] offset: usize) {
    let items = engine().autocomplete(sql, offset).unwrap();
    assert_eq!(
        texts(&items, CompletionItemKind::Column),
        vec!["id", "name", "email"]
    );
}

#[rstest]
#[case::qualified_prefix("SELECT users.| FROM users")]
#[case::join_condition("SELECT * FROM users JOIN shop.orders o ON |")]
#[case::order_by("SELECT id FROM users ORDER BY |")]
#[case::group_by("SELECT id FROM users GROUP BY |")]
#[case::update_where("UPDATE users SET name = 'x' WHERE id IN (SELECT id FROM users WHERE |)")]
fn first_table_in_scope_provides_columns(#[case] sql: &str) {
    let items = complete(&engine(), sql);
    assert_eq!(
        texts(&items, CompletionItemKind::Column),
        vec!["id", "name", "email"]
    );
}

#[test]
fn schema_qualified_table_binds_to_declared_schema() {
    let items = complete(&engine(), "SELECT | FROM shop.orders");
    assert_eq!(
        texts(&items, CompletionItemKind::Column),
        vec!["id", "user_id", "total"]
    );

    let items = complete(&engine(), "SELECT | FROM other.orders");
    assert!(texts(&items, CompletionItemKind::Column).is_empty());
}

#[test]
fn unknown_table_yields_no_columns() {
    let items = complete(&engine(), "SELECT | FROM missing");
    assert!(texts(&items, CompletionItemKind::Column).is_empty());
    assert!(!texts(&items, CompletionItemKind::Keyword).is_empty());
}

#[test]
fn alter_table_column_position_offers_the_altered_table() {
    let items = complete(&engine(), "ALTER TABLE users MODIFY |");
    assert_eq!(texts(&items, CompletionItemKind::Table), vec!["users"]);
    assert!(texts(&items, CompletionItemKind::Keyword).contains(&"COLUMN"));
}

#[test]
fn categories_are_ordered_keywords_columns_tables() {
    let items = complete(&engine(), "SELECT * FROM users WHERE |");
    let ranks: Vec<u8> = items
        .iter()
        .map(|item| match item.kind {
            CompletionItemKind::Keyword => 0,
            CompletionItemKind::Column => 1,
            CompletionItemKind::Table => 2,
        })
        .collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(ranks.contains(&1));
}

#[test]
fn multi_word_keywords_and_function_calls() {
    let items = MySqlAutocomplete::default().autocomplete("", 0).unwrap();
    let keywords = texts(&items, CompletionItemKind::Keyword);
    assert!(keywords.contains(&"RELEASE SAVEPOINT"));
    assert!(keywords.contains(&"SELECT"));

    let items = complete(&engine(), "SELECT |");
    let keywords = texts(&items, CompletionItemKind::Keyword);
    assert!(keywords.contains(&"DISTINCT"));
    assert!(!keywords.contains(&"COUNT"));
    assert!(!keywords.contains(&"SUM"));
}

#[test]
fn synonyms_are_emitted_with_primary_spelling() {
    let items = complete(&engine(), "CREATE |");
    let keywords = texts(&items, CompletionItemKind::Keyword);
    let database = keywords.iter().position(|k| *k == "DATABASE").unwrap();
    let schema = keywords.iter().position(|k| *k == "SCHEMA").unwrap();
    assert!(database < schema);
}

#[rstest]
#[case::default_modes(ParserOptions::default())]
#[case::high_not_precedence(ParserOptions::default().with_sql_mode(SqlMode::HighNotPrecedence))]
fn not2_is_never_emitted(#[case] parser_options: ParserOptions) {
    let engine = MySqlAutocomplete::new(sample_options().with_parser_options(parser_options));
    let items = complete(&engine, "SELECT * FROM users WHERE |");
    let keywords = texts(&items, CompletionItemKind::Keyword);
    assert!(keywords.contains(&"NOT"));
    assert!(!keywords.iter().any(|k| k.contains("NOT2")));
}

#[test]
fn lowercase_keywords_keep_the_same_set() {
    let upper = complete(&engine(), "SELECT * FROM users |");
    let lower_engine = MySqlAutocomplete::new(sample_options().with_uppercase_keywords(false));
    let lower = complete(&lower_engine, "SELECT * FROM users |");

    let upper_keywords = texts(&upper, CompletionItemKind::Keyword);
    let lower_keywords = texts(&lower, CompletionItemKind::Keyword);
    assert_eq!(upper_keywords.len(), lower_keywords.len());
    for (u, l) in upper_keywords.iter().zip(&lower_keywords) {
        assert_eq!(u.to_lowercase(), *l);
    }
    assert!(lower_keywords.contains(&"where"));
}

#[test]
fn offset_policy_controls_out_of_range_offsets() {
    let strict = MySqlAutocomplete::new(
        AutocompleteOptions::default().with_offset_policy(OffsetPolicy::Strict),
    );
    let err = strict.autocomplete("SELECT", 7).unwrap_err();
    assert!(matches!(
        err,
        CompletionError::OffsetOutOfRange {
            offset: 7,
            length: 6
        }
    ));
    assert!(strict.autocomplete("SELECT", 6).is_ok());

    let clamp = MySqlAutocomplete::default();
    assert_eq!(
        clamp.autocomplete("SELECT", 700).unwrap(),
        clamp.autocomplete("SELECT", 6).unwrap()
    );
}

#[test]
fn multi_statement_text_completes_statement_at_caret() {
    let items = complete(&engine(), "SELECT * FROM orders; SELECT | FROM users; SELECT 1");
    assert_eq!(
        texts(&items, CompletionItemKind::Column),
        vec!["id", "name", "email"]
    );

    let items = complete(&engine(), "SELECT 1;|");
    assert!(texts(&items, CompletionItemKind::Keyword).contains(&"SELECT"));
}

#[test]
fn server_version_gates_keywords() {
    let old = MySqlAutocomplete::new(AutocompleteOptions::default().with_parser_options(
        ParserOptions::default().with_server_version(ServerVersion::new(5, 7, 30)),
    ));
    let items = old.autocomplete("", 0).unwrap();
    assert!(!texts(&items, CompletionItemKind::Keyword).contains(&"WITH"));

    let items = MySqlAutocomplete::default().autocomplete("", 0).unwrap();
    assert!(texts(&items, CompletionItemKind::Keyword).contains(&"WITH"));
}

#[test]
fn unicode_offsets_are_characters() {
    let (sql, offset) = at_cursor("SELECT 'ünï' AS x, | FROM users");
    let items = engine().autocomplete(&sql, offset).unwrap();
    assert_eq!(
        texts(&items, CompletionItemKind::Column),
        vec!["id", "name", "email"]
    );
}

#[test]
fn options_round_trip_through_json() {
    let json = r#"{
        "uppercaseKeywords": false,
        "parserOptions": { "serverVersion": "5.7.7", "sqlModes": ["ANSI_QUOTES"] },
        "offsetPolicy": "strict"
    }"#;
    let options: AutocompleteOptions = serde_json::from_str(json).unwrap();
    assert!(!options.uppercase_keywords);
    assert_eq!(
        options.parser_options.server_version,
        ServerVersion::new(5, 7, 7)
    );
    assert_eq!(options.offset_policy, OffsetPolicy::Strict);
    assert!(options.schema.is_none());
}

#[rstest]
#[case::parentheses(format!("SELECT * FROM users WHERE {}", "(".repeat(1000)))]
#[case::subqueries(format!(
    "SELECT * FROM users WHERE id IN {}",
    "(SELECT id FROM users WHERE id IN ".repeat(200)
))]
#[case::derived_tables(format!("SELECT * FROM {}users", "(".repeat(1000)))]
fn deeply_nested_text_completes_without_overflow(#[case] sql: String) {
    let offset = sql.chars().count();
    let items = engine().autocomplete(&sql, offset).unwrap();
    let keywords = texts(&items, CompletionItemKind::Keyword);
    let unique: std::collections::HashSet<_> = keywords.iter().collect();
    assert_eq!(unique.len(), keywords.len());
}

#[test]
fn many_from_clauses_resolve_in_linear_time() {
    let sql = format!(
        "{}SELECT * FROM users WHERE ",
        "SELECT id FROM shop.orders UNION ".repeat(1000)
    );
    let started = Instant::now();
    let items = engine().autocomplete(&sql, sql.len()).unwrap();
    assert!(
        started.elapsed() < Duration::from_secs(10),
        "took {:?}",
        started.elapsed()
    );
    assert_eq!(
        texts(&items, CompletionItemKind::Column),
        vec!["id", "user_id", "total"]
    );
}
