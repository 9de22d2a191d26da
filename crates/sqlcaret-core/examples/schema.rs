//! Table and column completion against a JSON schema catalog.
//!
//! Run with: `cargo run -p sqlcaret-core --example schema`

use sqlcaret_core::{
    AutocompleteOptions, CompletionError, CompletionItemKind, MySqlAutocomplete, SchemaCatalog,
};

const CATALOG: &str = r#"{
  "tables": [
    { "name": "users", "columns": [{ "name": "id" }, { "name": "name" }, { "name": "email" }] },
    { "name": "orders", "columns": [{ "name": "id" }, { "name": "user_id" }, { "name": "total" }] }
  ]
}"#;

fn main() -> Result<(), CompletionError> {
    let catalog = SchemaCatalog::from_json(CATALOG)?;
    let engine = MySqlAutocomplete::new(AutocompleteOptions::default().with_schema(catalog));

    let requests = [
        "SELECT * FROM ",
        "SELECT  FROM orders",
        "SELECT * FROM users WHERE ",
        "ALTER TABLE users MODIFY ",
    ];
    for sql in requests {
        let offset = match sql.find("  ") {
            Some(position) => position + 1,
            None => sql.chars().count(),
        };
        let items = engine.autocomplete(sql, offset)?;
        println!("{sql:?} @ {offset}");
        for kind in [CompletionItemKind::Column, CompletionItemKind::Table] {
            let names: Vec<&str> = items
                .iter()
                .filter(|item| item.kind == kind)
                .map(|item| item.text.as_str())
                .collect();
            if !names.is_empty() {
                println!("  {kind:?}: {}", names.join(", "));
            }
        }
    }

    Ok(())
}
