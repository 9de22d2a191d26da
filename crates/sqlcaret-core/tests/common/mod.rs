#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use sqlcaret_core::{
    AutocompleteOptions, CompletionItem, CompletionItemKind, MySqlAutocomplete, SchemaCatalog,
};

/// The catalog shared by the integration tests: `users(id, name, email)` and
/// `shop.orders(id, user_id, total)`.
pub fn sample_catalog() -> Arc<SchemaCatalog> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("schema.json");
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load schema {path:?}: {e}"));
    Arc::new(SchemaCatalog::from_json(&json).expect("fixture schema is valid"))
}

pub fn sample_options() -> AutocompleteOptions {
    AutocompleteOptions::default().with_schema(sample_catalog())
}

/// Removes the `|` caret marker and returns the text plus the caret's character offset.
pub fn at_cursor(sql: &str) -> (String, usize) {
    let byte = sql.find('|').expect("sql must contain cursor marker '|'");
    (sql.replacen('|', "", 1), sql[..byte].chars().count())
}

pub fn complete(engine: &MySqlAutocomplete, sql: &str) -> Vec<CompletionItem> {
    let (text, offset) = at_cursor(sql);
    engine
        .autocomplete(&text, offset)
        .unwrap_or_else(|e| panic!("completion failed for {sql:?}: {e}"))
}

pub fn texts(items: &[CompletionItem], kind: CompletionItemKind) -> Vec<&str> {
    items
        .iter()
        .filter(|item| item.kind == kind)
        .map(|item| item.text.as_str())
        .collect()
}
