//! Reconstructs the tables visible at the caret.
//!
//! Both resolvers work on the scanner of the statement being completed and leave it
//! where they found it. `FROM` clauses are cut out of the text up to the next clause
//! keyword and handed to the grammar parser's `FromClause` entry point.

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::grammar::TokenKind;
use crate::parser::{unquote_identifier, EntryRule, GrammarParser};
use crate::types::{SchemaReference, TableReference};

use super::scanner::{Scanner, ScannerPosition};

/// References from `FROM` clauses in front of the caret, or for `ALTER TABLE` the
/// table being altered.
pub(crate) fn leading_table_references(
    scanner: &mut Scanner<'_>,
    parser: &impl GrammarParser,
    caret_index: usize,
    for_table_alter: bool,
) -> Vec<TableReference> {
    let references = scanner.scoped(|scanner| {
        if for_table_alter {
            altered_table(scanner)
        } else {
            leading_from_clauses(scanner, parser, caret_index)
        }
    });

    #[cfg(feature = "tracing")]
    debug!(count = references.len(), for_table_alter, "leading table references");
    references
}

/// References from the first `FROM` clause at or after the caret.
pub(crate) fn remaining_table_references(
    scanner: &mut Scanner<'_>,
    parser: &impl GrammarParser,
    caret: ScannerPosition,
) -> Vec<TableReference> {
    let references = scanner.scoped(|scanner| {
        scanner.restore(caret);
        let mut level = 0usize;
        let mut found = scanner.is(TokenKind::From);
        while !found {
            if !scanner.next() {
                return Vec::new();
            }
            match scanner.kind() {
                TokenKind::OpenPar => level += 1,
                // Trailing text may be unbalanced; a stray `)` is ignored.
                TokenKind::ClosePar => level = level.saturating_sub(1),
                TokenKind::From => found = level == 0,
                _ => {}
            }
        }
        parse_from_clause(scanner, parser)
    });

    #[cfg(feature = "tracing")]
    debug!(count = references.len(), "remaining table references");
    references
}

fn leading_from_clauses(
    scanner: &mut Scanner<'_>,
    parser: &impl GrammarParser,
    caret_index: usize,
) -> Vec<TableReference> {
    let mut references = Vec::new();
    scanner.seek(0);
    let mut level = 0usize;
    let mut found = scanner.is(TokenKind::From);
    loop {
        while !found {
            if !scanner.next() || scanner.index() >= caret_index {
                return references;
            }
            match scanner.kind() {
                TokenKind::OpenPar => level += 1,
                TokenKind::ClosePar => {
                    if level == 0 {
                        // Left the scope the caret is in.
                        return references;
                    }
                    level -= 1;
                }
                TokenKind::From => found = true,
                _ => {}
            }
        }
        references.extend(parse_from_clause(scanner, parser));
        found = false;
    }
}

/// `ALTER TABLE [schema.]table ...` seen from a caret inside the statement.
fn altered_table(scanner: &mut Scanner<'_>) -> Vec<TableReference> {
    while !scanner.is(TokenKind::Alter) {
        if !scanner.previous() {
            return Vec::new();
        }
    }
    if !scanner.skip_token_sequence(&[TokenKind::Alter, TokenKind::Table]) {
        return Vec::new();
    }
    if !scanner.kind().is_identifier_like() {
        return Vec::new();
    }

    let first = unquote_identifier(scanner.text());
    let first_span = scanner.span();
    let qualified = scanner.next()
        && scanner.is(TokenKind::Dot)
        && scanner.next()
        && scanner.kind().is_identifier_like();
    if !qualified {
        return vec![TableReference::table(first, first_span)];
    }

    let schema = SchemaReference {
        schema: first,
        span: first_span,
    };
    let mut table = TableReference::table(unquote_identifier(scanner.text()), scanner.span());
    table.schema_reference = Some(schema.clone());
    vec![table, TableReference::schema(schema)]
}

/// Re-parses the clause starting at the current `FROM` token and shifts the
/// resulting spans back into the statement's coordinates.
fn parse_from_clause(scanner: &Scanner<'_>, parser: &impl GrammarParser) -> Vec<TableReference> {
    let base = scanner.span().start;
    parser
        .parse(&scanner.clause_sub_text(), EntryRule::FromClause)
        .table_references
        .into_iter()
        .map(|reference| reference.offset_by(base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{tokenize, MySqlParser, TokenStream};
    use crate::types::{ParserOptions, ReferenceType, Span};

    fn stream(sql: &str) -> TokenStream {
        tokenize(sql, &ParserOptions::default())
    }

    fn tables(references: &[TableReference]) -> Vec<&str> {
        references
            .iter()
            .filter_map(|reference| reference.table.as_deref())
            .collect()
    }

    /// Resolves the caret at the first `|` the way the completion pipeline does.
    fn resolve(
        sql_with_caret: &str,
        for_table_alter: bool,
    ) -> (Vec<TableReference>, Vec<TableReference>) {
        let offset = sql_with_caret.find('|').unwrap();
        let sql = sql_with_caret.replacen('|', "", 1);
        let tokens = stream(&sql);
        let mut scanner = Scanner::new(&tokens);
        let caret_index = crate::completion::caret::resolve_caret(&mut scanner, offset);
        let caret = scanner.save();
        let parser = MySqlParser::default();
        let leading = leading_table_references(&mut scanner, &parser, caret_index, for_table_alter);
        assert_eq!(scanner.save(), caret);
        let remaining = remaining_table_references(&mut scanner, &parser, caret);
        assert_eq!(scanner.save(), caret);
        (leading, remaining)
    }

    #[test]
    fn leading_from_clause_before_caret() {
        let (leading, remaining) = resolve("SELECT * FROM users u WHERE |", false);
        assert_eq!(tables(&leading), vec!["users"]);
        assert_eq!(leading[0].span, Span::new(14, 19));
        assert_eq!(leading[0].alias(), Some("u"));
        assert!(remaining.is_empty());
    }

    #[test]
    fn remaining_from_clause_after_caret() {
        let (leading, remaining) = resolve("SELECT |, id FROM orders o JOIN users ON o.user_id = users.id", false);
        assert!(leading.is_empty());
        assert_eq!(tables(&remaining), vec!["orders", "users"]);
        assert_eq!(remaining[0].span, Span::new(17, 23));
    }

    #[test]
    fn subquery_scope_ends_at_closing_paren() {
        let (leading, remaining) = resolve(
            "SELECT * FROM (SELECT a FROM inner_t) d WHERE x = (SELECT | FROM other)",
            false,
        );
        assert_eq!(tables(&leading), vec!["inner_t"]);
        assert_eq!(tables(&remaining), vec!["other"]);
    }

    #[test]
    fn leaving_the_scope_stops_the_leading_scan() {
        let (leading, _) = resolve("SELECT a FROM t1) FROM t2 WHERE |", false);
        assert_eq!(tables(&leading), vec!["t1"]);
    }

    #[test]
    fn remaining_ignores_stray_closing_parens_and_nested_from() {
        let (_, remaining) = resolve("SELECT |) + (SELECT 1 FROM nested) FROM outer_t", false);
        assert_eq!(tables(&remaining), vec!["outer_t"]);
    }

    #[test]
    fn altered_table_plain_and_qualified() {
        let (leading, _) = resolve("ALTER TABLE users MODIFY |", true);
        assert_eq!(tables(&leading), vec!["users"]);

        let (leading, _) = resolve("ALTER TABLE app.`users` CHANGE |", true);
        assert_eq!(leading.len(), 2);
        assert_eq!(leading[0].table.as_deref(), Some("users"));
        assert_eq!(leading[0].schema_name(), Some("app"));
        assert_eq!(leading[1].kind, ReferenceType::SchemaRef);
        assert_eq!(leading[1].schema_name(), Some("app"));
    }

    #[test]
    fn altered_table_requires_alter_table() {
        assert!(resolve("SELECT |", true).0.is_empty());
        assert!(resolve("ALTER VIEW v AS SELECT |", true).0.is_empty());
    }
}
