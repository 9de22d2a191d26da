//! Fuzz target for the MySQL lexer.
//!
//! This tests that `tokenize()` doesn't panic and always yields a well-formed stream.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlcaret_core::{tokenize, ParserOptions, TokenKind};

fuzz_target!(|sql: &str| {
    let stream = tokenize(sql, &ParserOptions::default());
    let length = sql.chars().count();

    let last = stream.tokens().last().map(|token| token.kind);
    assert_eq!(last, Some(TokenKind::Eof));
    for (index, token) in stream.tokens().iter().enumerate() {
        assert_eq!(token.index, index);
        assert!(token.span.start <= token.span.end && token.span.end <= length);
    }
});
