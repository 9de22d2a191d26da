//! Keyword completion without a schema.
//!
//! Run with: `cargo run -p sqlcaret-core --example basic`

use sqlcaret_core::{CompletionError, MySqlAutocomplete};

fn main() -> Result<(), CompletionError> {
    let engine = MySqlAutocomplete::default();

    for (sql, offset) in [("SELEC", 5), ("SELECT * FROM users ", 20), ("", 0)] {
        let items = engine.autocomplete(sql, offset)?;
        let keywords: Vec<&str> = items.iter().map(|item| item.text.as_str()).take(12).collect();
        println!("{sql:?} @ {offset}: {} candidates", items.len());
        println!("  {}", keywords.join(", "));
    }

    Ok(())
}
