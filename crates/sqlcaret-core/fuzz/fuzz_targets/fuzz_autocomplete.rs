//! Fuzz target for caret completion.
//!
//! This tests that `autocomplete()` doesn't panic on arbitrary SQL and caret offsets.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sqlcaret_core::{
    AutocompleteOptions, MySqlAutocomplete, ParserOptions, SchemaCatalog, SchemaTable, SqlMode,
};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    sql: String,
    offset: u16,
    mode_bits: u8,
    uppercase: bool,
}

impl FuzzInput {
    fn options(&self) -> AutocompleteOptions {
        let mut parser_options = ParserOptions::default();
        for (bit, mode) in [
            SqlMode::AnsiQuotes,
            SqlMode::HighNotPrecedence,
            SqlMode::PipesAsConcat,
        ]
        .into_iter()
        .enumerate()
        {
            if self.mode_bits & (1 << bit) != 0 {
                parser_options = parser_options.with_sql_mode(mode);
            }
        }
        AutocompleteOptions::default()
            .with_parser_options(parser_options)
            .with_uppercase_keywords(self.uppercase)
            .with_schema(SchemaCatalog::new([
                SchemaTable::new("users", ["id", "name", "email"]),
                SchemaTable::new("orders", ["id", "user_id"]),
            ]))
    }
}

fuzz_target!(|input: FuzzInput| {
    let engine = MySqlAutocomplete::new(input.options());

    // Offsets past the end are clamped, so every request must succeed.
    let result = engine.autocomplete(&input.sql, usize::from(input.offset));
    assert!(result.is_ok());
});
