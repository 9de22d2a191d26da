//! Caret completion for MySQL.
//!
//! [`MySqlAutocomplete`] drives one request end to end: pick the statement under
//! the caret, tokenize it, map the caret offset to a token, collect grammar
//! candidates there and bind table/column candidates to the schema catalog.

mod aggregate;
mod binder;
mod caret;
pub mod scanner;
mod table_refs;

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::collector::{CandidateCollector, GrammarCollector};
use crate::error::CompletionError;
use crate::grammar::{RuleKind, TokenKind};
use crate::parser::{EntryRule, GrammarParser, MySqlParser, TokenStream};
use crate::types::{AutocompleteOptions, CompletionItem, OffsetPolicy, Span, TableReference};

use aggregate::{add_keywords, remap_not2, CandidateSets};
use scanner::Scanner;

pub use scanner::ScannerPosition;

/// Maximum accepted SQL text size in bytes (10 MiB).
pub const MAX_SQL_LENGTH: usize = 10 * 1024 * 1024;

/// Completion engine: configuration plus the parser and candidate collector it uses.
///
/// Requests share nothing mutable, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct MySqlAutocomplete<P = MySqlParser, C = GrammarCollector> {
    options: AutocompleteOptions,
    parser: P,
    collector: C,
}

impl MySqlAutocomplete {
    pub fn new(options: AutocompleteOptions) -> Self {
        let parser = MySqlParser::new(options.parser_options.clone());
        let collector = GrammarCollector::new(&options.parser_options);
        Self {
            options,
            parser,
            collector,
        }
    }
}

impl Default for MySqlAutocomplete {
    fn default() -> Self {
        Self::new(AutocompleteOptions::default())
    }
}

impl<P: GrammarParser, C: CandidateCollector> MySqlAutocomplete<P, C> {
    /// Uses custom collaborators, e.g. a different grammar or test doubles.
    pub fn with_collaborators(options: AutocompleteOptions, parser: P, collector: C) -> Self {
        Self {
            options,
            parser,
            collector,
        }
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    /// Completion candidates for the caret at character `offset` of `text`:
    /// keywords, then columns, then tables.
    pub fn autocomplete(
        &self,
        text: &str,
        offset: usize,
    ) -> Result<Vec<CompletionItem>, CompletionError> {
        if text.len() > MAX_SQL_LENGTH {
            return Err(CompletionError::InputTooLarge {
                length: text.len(),
                max: MAX_SQL_LENGTH,
            });
        }
        let length = text.chars().count();
        let offset = match self.options.offset_policy {
            _ if offset <= length => offset,
            OffsetPolicy::Clamp => length,
            OffsetPolicy::Strict => {
                return Err(CompletionError::OffsetOutOfRange { offset, length });
            }
        };

        #[cfg(feature = "tracing")]
        let _span = info_span!("autocomplete", offset, length).entered();

        let full = self.parser.parse(text, EntryRule::Query);
        let statements = split_statements(&full.tokens);
        let statement = find_statement_for_cursor(&statements, offset);

        #[cfg(feature = "tracing")]
        debug!(
            statement = statement.index,
            start = statement.span.start,
            end = statement.span.end,
            "selected statement"
        );

        let statement_text: String = text
            .chars()
            .skip(statement.span.start)
            .take(statement.span.len())
            .collect();
        Ok(self.complete_statement(
            &statement_text,
            offset - statement.span.start,
            statement.span.start,
        ))
    }

    /// Completes a single statement. `base` is its start in the full text.
    fn complete_statement(&self, sql: &str, offset: usize, base: usize) -> Vec<CompletionItem> {
        let parsed = self.parser.parse(sql, EntryRule::Query);
        let tokens = &parsed.tokens;
        let mut scanner = Scanner::new(tokens);
        let caret_index = caret::resolve_caret(&mut scanner, offset);
        let caret = scanner.save();

        let mut candidates = self.collector.collect_candidates(tokens, caret_index);

        #[cfg(feature = "tracing")]
        debug!(
            caret_index,
            token_candidates = candidates.tokens.len(),
            rule_candidates = candidates.rules.len(),
            "collected candidates"
        );

        let mut references: Vec<TableReference> = Vec::new();
        for rule in candidates.rules.keys() {
            match rule {
                RuleKind::ColumnRef => {
                    references = table_refs::leading_table_references(
                        &mut scanner,
                        &self.parser,
                        caret_index,
                        false,
                    );
                    references.extend(table_refs::remaining_table_references(
                        &mut scanner,
                        &self.parser,
                        caret,
                    ));
                    break;
                }
                RuleKind::ColumnInternalRef => {
                    references = table_refs::leading_table_references(
                        &mut scanner,
                        &self.parser,
                        caret_index,
                        true,
                    );
                    break;
                }
                _ => {}
            }
        }
        let references: Vec<TableReference> = references
            .into_iter()
            .map(|reference| reference.offset_by(base))
            .collect();

        #[cfg(feature = "tracing")]
        debug!(
            references = ?references
                .iter()
                .filter_map(|reference| reference.table.as_deref())
                .collect::<Vec<_>>(),
            "resolved table references"
        );

        remap_not2(&mut candidates.tokens);
        let mut sets = CandidateSets::default();
        add_keywords(
            &mut sets.keywords,
            &candidates.tokens,
            self.options.uppercase_keywords,
        );

        let catalog = self.options.schema.as_deref();
        for rule in candidates.rules.keys() {
            scanner.restore(caret);
            match rule {
                RuleKind::TableRef | RuleKind::FilterTableRef => {
                    sets.tables.extend(binder::catalog_tables(catalog));
                }
                RuleKind::TableWild | RuleKind::ColumnRef => {
                    let columns = binder::columns_of_first_table(catalog, &references);
                    sets.columns.extend(columns);
                }
                RuleKind::ColumnInternalRef => {
                    if let Some(table) =
                        binder::first_table(&references).and_then(|r| r.table.clone())
                    {
                        sets.tables.insert(table);
                    }
                }
                _ => {}
            }
        }

        sets.into_items()
    }
}

/// A `;`-delimited statement of the request text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatementInfo {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    index: usize,
    /// From just after the previous `;` up to this statement's `;` (or the end).
    span: Span,
}

fn split_statements(tokens: &TokenStream) -> Vec<StatementInfo> {
    let mut statements = Vec::new();
    let mut start = 0;
    for token in tokens.default_channel() {
        if token.kind == TokenKind::Semicolon {
            statements.push(StatementInfo {
                index: statements.len(),
                span: Span::new(start, token.span.start),
            });
            start = token.span.end;
        }
    }
    statements.push(StatementInfo {
        index: statements.len(),
        span: Span::new(start, tokens.char_len()),
    });
    statements
}

/// The last statement starting at or before the caret. A caret right after a `;`
/// therefore belongs to the statement that follows it.
fn find_statement_for_cursor(statements: &[StatementInfo], cursor_offset: usize) -> StatementInfo {
    statements
        .iter()
        .rev()
        .find(|statement| statement.span.start <= cursor_offset)
        .or_else(|| statements.first())
        .copied()
        .unwrap_or(StatementInfo {
            index: 0,
            span: Span::new(0, 0),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use crate::types::{ParserOptions, SchemaCatalog, SchemaTable};

    fn statements(sql: &str) -> Vec<StatementInfo> {
        split_statements(&tokenize(sql, &ParserOptions::default()))
    }

    #[test]
    fn splits_at_semicolons() {
        let parts = statements("SELECT 1; SELECT 2;");
        assert_eq!(
            parts.iter().map(|s| s.span).collect::<Vec<_>>(),
            vec![Span::new(0, 8), Span::new(9, 18), Span::new(19, 19)]
        );
        assert_eq!(parts[2].index, 2);
    }

    #[test]
    fn semicolons_inside_strings_do_not_split() {
        assert_eq!(statements("SELECT ';' FROM t").len(), 1);
    }

    #[test]
    fn caret_after_semicolon_belongs_to_next_statement() {
        let parts = statements("SELECT 1;SELECT 2");
        assert_eq!(find_statement_for_cursor(&parts, 8).index, 0);
        assert_eq!(find_statement_for_cursor(&parts, 9).index, 1);
        assert_eq!(find_statement_for_cursor(&parts, 17).index, 1);
    }

    #[test]
    fn rejects_oversized_input() {
        let sql = "x".repeat(MAX_SQL_LENGTH + 1);
        let err = MySqlAutocomplete::default().autocomplete(&sql, 0).unwrap_err();
        assert!(matches!(err, CompletionError::InputTooLarge { .. }));
    }

    #[test]
    fn completes_second_statement() {
        let catalog = SchemaCatalog::new([SchemaTable::new("users", ["id", "name"])]);
        let engine = MySqlAutocomplete::new(AutocompleteOptions::default().with_schema(catalog));
        let sql = "SELECT 1; SELECT * FROM ";
        let items = engine.autocomplete(sql, sql.len()).unwrap();
        assert!(items.contains(&CompletionItem::table("users")));
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MySqlAutocomplete>();
    }
}
