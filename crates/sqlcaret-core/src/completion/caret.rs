//! Maps a caret character offset to the token index candidates are collected for.

use crate::grammar::TokenKind;

use super::scanner::Scanner;

/// Tokens after which a new token may start without intervening whitespace.
const NO_SEPARATOR_REQUIRED: &[TokenKind] = &[
    TokenKind::Equal,
    TokenKind::Assign,
    TokenKind::NullSafeEqual,
    TokenKind::GreaterOrEqual,
    TokenKind::Greater,
    TokenKind::LessOrEqual,
    TokenKind::Less,
    TokenKind::NotEqual,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Mult,
    TokenKind::Divide,
    TokenKind::Modulo,
    TokenKind::LogicalNot,
    TokenKind::BitwiseNot,
    TokenKind::ShiftLeft,
    TokenKind::ShiftRight,
    TokenKind::LogicalAnd,
    TokenKind::BitwiseAnd,
    TokenKind::BitwiseXor,
    TokenKind::LogicalOr,
    TokenKind::BitwiseOr,
    TokenKind::Dot,
    TokenKind::Comma,
    TokenKind::Semicolon,
    TokenKind::Colon,
    TokenKind::OpenPar,
    TokenKind::ClosePar,
    TokenKind::AtSign,
    TokenKind::AtAt,
    TokenKind::ParamMarker,
];

/// Positions `scanner` on the token at `offset` and returns the caret token index.
///
/// When the caret touches a word that follows another word, the word is the one
/// being typed, so candidates are collected for the token before it.
pub(crate) fn resolve_caret(scanner: &mut Scanner<'_>, offset: usize) -> usize {
    scanner.advance_to_position(offset);
    let index = scanner.index();
    if index > 0 && !NO_SEPARATOR_REQUIRED.contains(&scanner.look_back()) {
        index - 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use crate::types::ParserOptions;

    fn caret(sql: &str, offset: usize) -> (usize, usize) {
        let stream = tokenize(sql, &ParserOptions::default());
        let mut scanner = Scanner::new(&stream);
        let index = resolve_caret(&mut scanner, offset);
        (index, scanner.index())
    }

    #[test]
    fn word_after_word_steps_back() {
        // SELECT(0) ws(1) nam(2)
        assert_eq!(caret("SELECT nam", 9), (1, 2));
        assert_eq!(caret("SELECT", 6), (0, 1));
    }

    #[test]
    fn word_after_punctuation_stays() {
        // SELECT(0) ws(1) u(2) .(3) na(4)
        assert_eq!(caret("SELECT u.na", 11), (4, 5));
        assert_eq!(caret("SELECT u.na", 10), (4, 4));
    }

    #[test]
    fn start_of_text() {
        assert_eq!(caret("", 0), (0, 0));
        assert_eq!(caret("SELECT", 0), (0, 0));
    }
}
