//! Public data types for the completion API.
//!
//! Requests are configured with [`AutocompleteOptions`] and answered with a list of
//! [`CompletionItem`]s. The remaining types describe the schema catalog consulted for
//! table and column names and the table references recovered from the SQL text.

mod common;
mod completion;
mod options;
mod references;
mod schema;

pub use common::Span;
pub use completion::{CompletionItem, CompletionItemKind};
pub use options::{AutocompleteOptions, OffsetPolicy, ParserOptions, ServerVersion, SqlMode};
pub use references::{AliasReference, ReferenceType, SchemaReference, TableReference};
pub use schema::{CaseSensitivity, ColumnSchema, SchemaCatalog, SchemaTable};
