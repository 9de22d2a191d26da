//! Test utilities for loading fixtures and placing carets.

use std::path::PathBuf;

use crate::{AutocompleteOptions, CompletionItem, MySqlAutocomplete, SchemaCatalog};

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir).join("tests").join("fixtures")
}

/// Load a schema catalog JSON fixture by name
pub fn load_schema_fixture(name: &str) -> SchemaCatalog {
    let path = fixtures_dir().join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load schema {path:?}: {e}"));
    SchemaCatalog::from_json(&content)
        .unwrap_or_else(|e| panic!("Failed to parse schema {path:?}: {e}"))
}

/// Splits `sql|more` into the text without the marker and the caret offset.
pub fn split_caret(sql_with_caret: &str) -> (String, usize) {
    let byte = sql_with_caret
        .find('|')
        .unwrap_or_else(|| panic!("no caret marker in {sql_with_caret:?}"));
    let offset = sql_with_caret[..byte].chars().count();
    (sql_with_caret.replacen('|', "", 1), offset)
}

/// Runs a completion at the `|` marker with the shared sample schema.
pub fn complete_at(sql_with_caret: &str) -> Vec<CompletionItem> {
    let (sql, offset) = split_caret(sql_with_caret);
    let options = AutocompleteOptions::default().with_schema(load_schema_fixture("schema.json"));
    MySqlAutocomplete::new(options)
        .autocomplete(&sql, offset)
        .unwrap_or_else(|e| panic!("completion failed for {sql_with_caret:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompletionItemKind;

    #[test]
    fn caret_offsets_count_characters() {
        assert_eq!(split_caret("SELECT é|"), ("SELECT é".to_string(), 8));
    }

    #[test]
    fn fixture_schema_loads() {
        let catalog = load_schema_fixture("schema.json");
        assert!(catalog.find_table("users", None).is_some());
    }

    #[test]
    fn completes_with_fixture_schema() {
        let items = complete_at("SELECT * FROM users WHERE |");
        let columns: Vec<_> = items
            .iter()
            .filter(|item| item.kind == CompletionItemKind::Column)
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(columns, vec!["id", "name", "email"]);
    }
}
