pub mod collector;
pub mod completion;
pub mod error;
pub mod grammar;
pub mod parser;
pub mod types;

// Re-export the main completion API
pub use collector::{CandidateCollector, CandidatesCollection, GrammarCollector, MAX_RULE_DEPTH};
pub use completion::{MySqlAutocomplete, ScannerPosition, MAX_SQL_LENGTH};
pub use error::CompletionError;
pub use grammar::{mysql_grammar, RuleKind, TokenKind};
pub use parser::{tokenize, EntryRule, GrammarParser, MySqlParser, ParseResult, TokenStream};

// Re-export types explicitly
pub use types::{
    AliasReference,
    // Configuration
    AutocompleteOptions,
    CaseSensitivity,
    ColumnSchema,
    // Results
    CompletionItem,
    CompletionItemKind,
    OffsetPolicy,
    ParserOptions,
    ReferenceType,
    SchemaCatalog,
    SchemaReference,
    SchemaTable,
    ServerVersion,
    Span,
    SqlMode,
    TableReference,
};

// Test utilities (must be at end of file)
#[cfg(test)]
pub mod test_utils;
