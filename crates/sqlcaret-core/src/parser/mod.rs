//! Grammar parser front end.
//!
//! Parsing here means tokenizing for the grammar and, for the `FROM`-clause entry
//! point, extracting the table references of the clause. Both operations tolerate
//! incomplete and invalid text.

pub mod lexer;
mod references;

pub use lexer::{tokenize, Channel, Token, TokenStream};
pub(crate) use references::unquote_identifier;

use crate::types::{ParserOptions, TableReference};

/// The grammar rule a parse starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRule {
    /// A complete statement.
    Query,
    /// A `FROM` clause and everything after it.
    FromClause,
}

/// Output of a parse.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub tokens: TokenStream,
    /// Table references found by the `FromClause` entry rule. Empty for `Query`.
    pub table_references: Vec<TableReference>,
}

/// Parses MySQL text into a token stream (and table references for `FROM` clauses).
pub trait GrammarParser {
    fn parse(&self, sql: &str, entry: EntryRule) -> ParseResult;
}

/// The built-in MySQL parser.
#[derive(Debug, Clone, Default)]
pub struct MySqlParser {
    options: ParserOptions,
}

impl MySqlParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }
}

impl GrammarParser for MySqlParser {
    fn parse(&self, sql: &str, entry: EntryRule) -> ParseResult {
        let tokens = tokenize(sql, &self.options);
        let table_references = match entry {
            EntryRule::Query => Vec::new(),
            EntryRule::FromClause => {
                let default: Vec<&Token> = tokens.default_channel().collect();
                references::extract_from_clause(&default)
            }
        };
        ParseResult {
            tokens,
            table_references,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::TokenKind;

    #[test]
    fn query_entry_only_tokenizes() {
        let result = MySqlParser::default().parse("SELECT * FROM users", EntryRule::Query);
        assert!(result.table_references.is_empty());
        assert_eq!(result.tokens.tokens()[0].kind, TokenKind::Select);
    }

    #[test]
    fn from_clause_entry_extracts_references() {
        let result =
            MySqlParser::default().parse("FROM users u JOIN orders WHERE", EntryRule::FromClause);
        let tables: Vec<_> = result
            .table_references
            .iter()
            .filter_map(|r| r.table.as_deref())
            .collect();
        assert_eq!(tables, vec!["users", "orders"]);
    }
}
