//! Table reference extraction for `FROM` clauses.
//!
//! Works on the default-channel tokens of a clause that starts at `FROM` and runs
//! to the end of the text. Joins, aliases, partitions and index hints are understood;
//! derived tables are skipped since they do not name catalog tables.

use crate::grammar::TokenKind;
use crate::types::{AliasReference, SchemaReference, TableReference};

use super::lexer::Token;

/// Collects the table references of the `FROM` clause at the start of `tokens`.
pub(crate) fn extract_from_clause(tokens: &[&Token]) -> Vec<TableReference> {
    let mut extractor = FromClauseExtractor {
        tokens,
        index: 0,
        depth: 0,
        references: Vec::new(),
    };
    if extractor.at(TokenKind::From) {
        extractor.index += 1;
    }
    extractor.table_list();
    extractor.references
}

/// Removes identifier quotes, unescaping doubled quote characters.
pub(crate) fn unquote_identifier(text: &str) -> String {
    for quote in ['`', '"'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            let inner = &text[1..text.len() - 1];
            return inner.replace(&format!("{quote}{quote}"), &quote.to_string());
        }
    }
    text.to_string()
}

/// Nesting limit for parenthesized table lists and `{ OJ ... }` groups. Deeper
/// groups are skipped without being read.
const MAX_NESTING: usize = 64;

struct FromClauseExtractor<'a> {
    tokens: &'a [&'a Token],
    index: usize,
    depth: usize,
    references: Vec<TableReference>,
}

impl<'a> FromClauseExtractor<'a> {
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.index).copied()
    }

    fn kind(&self) -> TokenKind {
        self.current().map_or(TokenKind::Eof, |token| token.kind)
    }

    fn kind_at(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.index + offset)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn table_list(&mut self) {
        loop {
            let before = self.index;
            self.table_reference();
            if self.accept(TokenKind::Comma) {
                continue;
            }
            if self.index == before || is_clause_end(self.kind()) {
                break;
            }
            // Unrecognized text inside the clause; step over it and keep looking.
            self.index += 1;
        }
    }

    fn table_reference(&mut self) {
        if self.at(TokenKind::OpenCurly) {
            // `{ OJ table_reference ... }`
            self.index += 1;
            if self.depth < MAX_NESTING {
                if self.current().is_some_and(|t| t.text.eq_ignore_ascii_case("oj")) {
                    self.index += 1;
                }
                self.depth += 1;
                self.table_reference();
                self.depth -= 1;
            }
            self.skip_to_close(TokenKind::CloseCurly);
            return;
        }

        self.table_factor();
        while self.join() {}
    }

    fn table_factor(&mut self) {
        match self.kind() {
            TokenKind::OpenPar => {
                if !self.is_parenthesized_table_list() {
                    self.skip_parenthesized();
                    self.alias();
                } else if self.depth >= MAX_NESTING {
                    self.skip_parenthesized();
                } else {
                    self.index += 1;
                    self.depth += 1;
                    self.table_list();
                    self.depth -= 1;
                    self.accept(TokenKind::ClosePar);
                }
            }
            TokenKind::Lateral => {
                self.index += 1;
                self.skip_parenthesized();
                self.alias();
            }
            TokenKind::Dual => self.index += 1,
            kind if kind.is_identifier_like() => self.table_name(),
            _ => {}
        }
    }

    /// `((t1, t2))` nests table lists while `((SELECT ...))` nests a query.
    fn is_parenthesized_table_list(&self) -> bool {
        let mut offset = 0;
        while self.kind_at(offset) == TokenKind::OpenPar {
            offset += 1;
        }
        !matches!(
            self.kind_at(offset),
            TokenKind::Select | TokenKind::With | TokenKind::Values | TokenKind::Table
        )
    }

    fn table_name(&mut self) {
        let Some(first) = self.current() else {
            return;
        };
        self.index += 1;

        let mut reference = if self.at(TokenKind::Dot) && self.kind_at(1).is_identifier_like() {
            let Some(table) = self.tokens.get(self.index + 1).copied() else {
                return;
            };
            self.index += 2;
            let mut reference = TableReference::table(unquote_identifier(&table.text), table.span);
            reference.schema_reference = Some(SchemaReference {
                schema: unquote_identifier(&first.text),
                span: first.span,
            });
            reference
        } else {
            TableReference::table(unquote_identifier(&first.text), first.span)
        };

        if self.accept(TokenKind::Partition) {
            self.skip_parenthesized();
        }
        reference.alias_reference = self.alias();
        self.index_hints();
        self.references.push(reference);
    }

    fn alias(&mut self) -> Option<AliasReference> {
        let explicit = self.accept(TokenKind::As);
        let token = self.current()?;
        let usable = match token.kind {
            TokenKind::SingleQuotedText | TokenKind::DoubleQuotedText => explicit,
            kind => kind.is_identifier_like() && !is_clause_end(kind) && !is_join_start(kind),
        };
        if !usable {
            return None;
        }
        let alias = AliasReference {
            alias: unquote_identifier(token.text.trim_matches('\'')),
            span: token.span,
        };
        self.index += 1;
        Some(alias)
    }

    fn index_hints(&mut self) {
        while matches!(self.kind(), TokenKind::Use | TokenKind::Ignore | TokenKind::Force)
            && matches!(self.kind_at(1), TokenKind::Index | TokenKind::Key)
        {
            self.index += 2;
            if self.accept(TokenKind::For) {
                // FOR JOIN | FOR ORDER BY | FOR GROUP BY
                if !self.accept(TokenKind::Join) {
                    self.index += 1;
                    self.accept(TokenKind::By);
                }
            }
            self.skip_parenthesized();
            if self.at(TokenKind::Comma)
                && matches!(self.kind_at(1), TokenKind::Use | TokenKind::Ignore | TokenKind::Force)
            {
                self.index += 1;
            }
        }
    }

    fn join(&mut self) -> bool {
        if !is_join_start(self.kind()) {
            return false;
        }
        while !matches!(
            self.kind(),
            TokenKind::Join | TokenKind::StraightJoin | TokenKind::Eof
        ) {
            if !is_join_start(self.kind()) {
                return false;
            }
            self.index += 1;
        }
        self.index += 1;

        self.table_factor();
        if self.accept(TokenKind::On) {
            self.skip_join_condition();
        } else if self.accept(TokenKind::Using) {
            self.skip_parenthesized();
        }
        true
    }

    fn skip_join_condition(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                TokenKind::OpenPar => depth += 1,
                TokenKind::ClosePar => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                kind if depth == 0
                    && (kind == TokenKind::Comma || is_join_start(kind) || is_clause_end(kind)) =>
                {
                    return
                }
                _ => {}
            }
            self.index += 1;
        }
    }

    fn skip_parenthesized(&mut self) {
        if !self.accept(TokenKind::OpenPar) {
            return;
        }
        self.skip_to_close(TokenKind::ClosePar);
    }

    /// Skips past the matching `close`, assuming its opener was already consumed.
    fn skip_to_close(&mut self, close: TokenKind) {
        let open = match close {
            TokenKind::CloseCurly => TokenKind::OpenCurly,
            _ => TokenKind::OpenPar,
        };
        let mut depth = 1usize;
        while depth > 0 {
            match self.kind() {
                TokenKind::Eof => return,
                kind if kind == open => depth += 1,
                kind if kind == close => depth -= 1,
                _ => {}
            }
            self.index += 1;
        }
    }
}

fn is_join_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Join
            | TokenKind::Inner
            | TokenKind::Cross
            | TokenKind::StraightJoin
            | TokenKind::Left
            | TokenKind::Right
            | TokenKind::Natural
            | TokenKind::Outer
    )
}

fn is_clause_end(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Eof
            | TokenKind::Invalid
            | TokenKind::Semicolon
            | TokenKind::ClosePar
            | TokenKind::Where
            | TokenKind::Group
            | TokenKind::Having
            | TokenKind::Order
            | TokenKind::Limit
            | TokenKind::Window
            | TokenKind::For
            | TokenKind::Lock
            | TokenKind::Union
            | TokenKind::Except
            | TokenKind::Intersect
            | TokenKind::Into
            | TokenKind::Set
            | TokenKind::On
            | TokenKind::Using
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use crate::types::{ParserOptions, Span};

    fn references(sql: &str) -> Vec<TableReference> {
        let stream = tokenize(sql, &ParserOptions::default());
        let tokens: Vec<&Token> = stream.default_channel().collect();
        extract_from_clause(&tokens)
    }

    fn names(sql: &str) -> Vec<(Option<String>, Option<String>, Option<String>)> {
        references(sql)
            .into_iter()
            .map(|r| {
                (
                    r.schema_name().map(str::to_string),
                    r.table.clone(),
                    r.alias().map(str::to_string),
                )
            })
            .collect()
    }

    fn table(name: &str) -> (Option<String>, Option<String>, Option<String>) {
        (None, Some(name.to_string()), None)
    }

    #[test]
    fn single_table_with_span() {
        let refs = references("FROM users WHERE id = 1");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].table.as_deref(), Some("users"));
        assert_eq!(refs[0].span, Span::new(5, 10));
    }

    #[test]
    fn comma_list_with_aliases_and_schema() {
        assert_eq!(
            names("FROM app.users AS u, orders o, `line items`"),
            vec![
                (Some("app".into()), Some("users".into()), Some("u".into())),
                (None, Some("orders".into()), Some("o".into())),
                table("line items"),
            ]
        );
    }

    #[test]
    fn joins_skip_conditions() {
        assert_eq!(
            names("FROM users u LEFT OUTER JOIN orders ON (u.id = orders.user_id) AND u.x > 1 JOIN items USING (id) ORDER BY 1"),
            vec![
                (None, Some("users".into()), Some("u".into())),
                table("orders"),
                table("items"),
            ]
        );
    }

    #[test]
    fn derived_tables_are_skipped() {
        assert_eq!(
            names("FROM (SELECT * FROM inner_t) AS d, users"),
            vec![table("users")]
        );
    }

    #[test]
    fn parenthesized_table_lists_are_recursed() {
        assert_eq!(
            names("FROM (users, orders) CROSS JOIN items"),
            vec![table("users"), table("orders"), table("items")]
        );
    }

    #[test]
    fn deeply_nested_table_lists_are_skipped() {
        let sql = format!("FROM {}users{} JOIN orders", "(".repeat(5000), ")".repeat(5000));
        assert_eq!(names(&sql), vec![table("orders")]);
        assert_eq!(names("FROM ((users))"), vec![table("users")]);
    }

    #[test]
    fn partitions_and_index_hints() {
        assert_eq!(
            names("FROM users PARTITION (p0, p1) AS u USE INDEX FOR JOIN (idx) IGNORE KEY (k) WHERE 1"),
            vec![(None, Some("users".into()), Some("u".into()))]
        );
    }

    #[test]
    fn stops_at_closing_paren_and_incomplete_text() {
        assert_eq!(names("FROM users) AS x"), vec![table("users")]);
        assert_eq!(names("FROM users WHERE name = 'abc"), vec![table("users")]);
        assert!(names("FROM").is_empty());
    }

    #[test]
    fn unquotes_identifiers() {
        assert_eq!(unquote_identifier("`a``b`"), "a`b");
        assert_eq!(unquote_identifier("\"x\""), "x");
        assert_eq!(unquote_identifier("plain"), "plain");
        assert_eq!(unquote_identifier("`"), "`");
    }
}
