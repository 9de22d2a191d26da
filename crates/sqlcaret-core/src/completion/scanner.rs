//! Cursor over a token stream.
//!
//! Stepping skips hidden-channel tokens. Positions are plain values: take one with
//! [`Scanner::save`] and go back with [`Scanner::restore`], or let
//! [`Scanner::scoped`] do both around a closure.

use crate::grammar::TokenKind;
use crate::parser::{Token, TokenStream};
use crate::types::Span;

/// A saved scanner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerPosition(usize);

pub struct Scanner<'a> {
    stream: &'a TokenStream,
    index: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Self { stream, index: 0 }
    }

    pub fn token(&self) -> Option<&'a Token> {
        self.stream.get(self.index)
    }

    pub fn kind(&self) -> TokenKind {
        self.token().map_or(TokenKind::Eof, |token| token.kind)
    }

    pub fn text(&self) -> &'a str {
        self.token().map_or("", |token| token.text.as_str())
    }

    pub fn span(&self) -> Span {
        self.token().map_or_else(
            || Span::new(self.stream.char_len(), self.stream.char_len()),
            |token| token.span,
        )
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    /// Moves to the next default-channel token. Returns false when there is none,
    /// in which case the scanner sits on the last token.
    pub fn next(&mut self) -> bool {
        while self.index + 1 < self.stream.len() {
            self.index += 1;
            if self.token().is_some_and(|token| !token.is_hidden()) {
                return true;
            }
        }
        false
    }

    /// Moves to the previous default-channel token. Returns false when there is
    /// none, in which case the scanner sits on the first token.
    pub fn previous(&mut self) -> bool {
        while self.index > 0 {
            self.index -= 1;
            if self.token().is_some_and(|token| !token.is_hidden()) {
                return true;
            }
        }
        false
    }

    /// Jumps to a stream index, clamped to the last token.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.stream.len().saturating_sub(1));
    }

    /// Moves to the token containing the character `offset`. Without one, moves to
    /// the token before the first token starting after it, or to `EOF`.
    pub fn advance_to_position(&mut self, offset: usize) {
        let tokens = self.stream.tokens();
        if let Some(token) = tokens.iter().find(|token| token.span.contains(offset)) {
            self.index = token.index;
            return;
        }
        self.index = match tokens.iter().position(|token| token.span.start > offset) {
            Some(next) if next > 0 => next - 1,
            _ => tokens.len().saturating_sub(1),
        };
    }

    /// Kind of the closest default-channel token before the current one.
    pub fn look_back(&self) -> TokenKind {
        self.stream.tokens()[..self.index.min(self.stream.len())]
            .iter()
            .rev()
            .find(|token| !token.is_hidden())
            .map_or(TokenKind::Invalid, |token| token.kind)
    }

    /// Consumes `sequence` when the tokens from the current one on match it,
    /// leaving the scanner on the token after it. On mismatch nothing moves.
    pub fn skip_token_sequence(&mut self, sequence: &[TokenKind]) -> bool {
        let start = self.save();
        for kind in sequence {
            if !self.is(*kind) || !self.next() {
                self.restore(start);
                return false;
            }
        }
        true
    }

    /// Source text from the start of the current token to the end of the text.
    pub fn token_sub_text(&self) -> &'a str {
        self.stream.text_from(self.span().start)
    }

    /// Source text from the start of the current token up to the end of its clause:
    /// the first `WHERE`, `GROUP BY`, `ORDER BY`, set operator or other clause
    /// keyword at the same nesting level, an unmatched `)`, or the end of the text.
    pub fn clause_sub_text(&self) -> String {
        let tokens = &self.stream.tokens()[self.index.min(self.stream.len())..];
        let mut text = String::new();
        let mut level = 0usize;
        let mut previous = TokenKind::Invalid;
        for (position, token) in tokens.iter().enumerate() {
            if token.is_hidden() {
                text.push_str(&token.text);
                continue;
            }
            match token.kind {
                TokenKind::OpenPar => level += 1,
                TokenKind::ClosePar if level == 0 => break,
                TokenKind::ClosePar => level -= 1,
                kind if position > 0 && level == 0 && ends_clause(kind, previous) => break,
                _ => {}
            }
            text.push_str(&token.text);
            previous = token.kind;
        }
        text
    }

    pub fn save(&self) -> ScannerPosition {
        ScannerPosition(self.index)
    }

    pub fn restore(&mut self, position: ScannerPosition) {
        self.index = position.0;
    }

    /// Runs `f` and puts the scanner back where it was, whatever `f` did.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let position = self.save();
        let result = f(self);
        self.restore(position);
        result
    }
}

/// Keywords that start the clause after a `FROM` clause. Index hints
/// (`USE INDEX FOR ORDER BY (...)`) keep their `FOR`, `ORDER` and `GROUP`.
fn ends_clause(kind: TokenKind, previous: TokenKind) -> bool {
    match kind {
        TokenKind::For => !matches!(previous, TokenKind::Index | TokenKind::Key),
        TokenKind::Group | TokenKind::Order => previous != TokenKind::For,
        TokenKind::Where
        | TokenKind::Having
        | TokenKind::Limit
        | TokenKind::Window
        | TokenKind::Lock
        | TokenKind::Into
        | TokenKind::Union
        | TokenKind::Except
        | TokenKind::Intersect
        | TokenKind::Semicolon => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use crate::types::ParserOptions;

    fn stream(sql: &str) -> TokenStream {
        tokenize(sql, &ParserOptions::default())
    }

    #[test]
    fn steps_over_hidden_tokens() {
        let tokens = stream("SELECT /* c */ a");
        let mut scanner = Scanner::new(&tokens);
        assert!(scanner.is(TokenKind::Select));
        assert!(scanner.next());
        assert_eq!(scanner.text(), "a");
        assert!(scanner.next());
        assert!(scanner.is(TokenKind::Eof));
        assert!(!scanner.next());
        assert!(scanner.is(TokenKind::Eof));

        assert!(scanner.previous());
        assert!(scanner.previous());
        assert!(scanner.is(TokenKind::Select));
        assert!(!scanner.previous());
    }

    #[test]
    fn advances_to_character_offsets() {
        let tokens = stream("SELECT a FROM t");
        let mut scanner = Scanner::new(&tokens);
        scanner.advance_to_position(10);
        assert!(scanner.is(TokenKind::From));
        scanner.advance_to_position(15);
        assert!(scanner.is(TokenKind::Eof));
        scanner.advance_to_position(99);
        assert!(scanner.is(TokenKind::Eof));
    }

    #[test]
    fn look_back_skips_whitespace() {
        let tokens = stream("SELECT a,  b");
        let mut scanner = Scanner::new(&tokens);
        scanner.advance_to_position(11);
        assert_eq!(scanner.text(), "b");
        assert_eq!(scanner.look_back(), TokenKind::Comma);
        scanner.seek(0);
        assert_eq!(scanner.look_back(), TokenKind::Invalid);
    }

    #[test]
    fn token_sequences_are_all_or_nothing() {
        let tokens = stream("ALTER TABLE users");
        let mut scanner = Scanner::new(&tokens);
        assert!(!scanner.skip_token_sequence(&[TokenKind::Alter, TokenKind::View]));
        assert!(scanner.is(TokenKind::Alter));
        assert!(scanner.skip_token_sequence(&[TokenKind::Alter, TokenKind::Table]));
        assert_eq!(scanner.text(), "users");
    }

    #[test]
    fn scoped_restores_position() {
        let tokens = stream("SELECT a FROM t");
        let mut scanner = Scanner::new(&tokens);
        scanner.next();
        let before = scanner.save();
        let seen = scanner.scoped(|s| {
            s.seek(0);
            while s.next() {}
            s.kind()
        });
        assert_eq!(seen, TokenKind::Eof);
        assert_eq!(scanner.save(), before);
        assert_eq!(scanner.token_sub_text(), "a FROM t");
    }

    #[test]
    fn clause_sub_text_stops_at_the_next_clause() {
        let tokens = stream("SELECT * FROM a JOIN (SELECT 1 FROM b WHERE x) d ON a.id = d.id WHERE y");
        let mut scanner = Scanner::new(&tokens);
        while !scanner.is(TokenKind::From) {
            scanner.next();
        }
        assert_eq!(
            scanner.clause_sub_text(),
            "FROM a JOIN (SELECT 1 FROM b WHERE x) d ON a.id = d.id "
        );

        let tokens = stream("SELECT * FROM t USE INDEX FOR ORDER BY (i) ORDER BY 1");
        let mut scanner = Scanner::new(&tokens);
        while !scanner.is(TokenKind::From) {
            scanner.next();
        }
        assert_eq!(scanner.clause_sub_text(), "FROM t USE INDEX FOR ORDER BY (i) ");
    }

    #[test]
    fn clause_sub_text_ends_with_its_subquery() {
        let tokens = stream("SELECT (SELECT a FROM t) UNION SELECT 2");
        let mut scanner = Scanner::new(&tokens);
        while !scanner.is(TokenKind::From) {
            scanner.next();
        }
        assert_eq!(scanner.clause_sub_text(), "FROM t");
    }
}
