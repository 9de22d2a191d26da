use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Span;

/// What a [`TableReference`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceType {
    TableRef,
    SchemaRef,
}

/// The `[AS] alias` attached to a table in a `FROM` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AliasReference {
    pub alias: String,
    pub span: Span,
}

/// The schema qualifier of a `schema.table` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaReference {
    pub schema: String,
    pub span: Span,
}

/// A table (or schema) named in the statement around the caret.
///
/// Names are stored unquoted. `span` covers the name token in the original text and
/// is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    #[serde(rename = "type")]
    pub kind: ReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_reference: Option<AliasReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_reference: Option<SchemaReference>,
}

impl TableReference {
    pub fn table(name: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ReferenceType::TableRef,
            table: Some(name.into()),
            span,
            alias_reference: None,
            schema_reference: None,
        }
    }

    pub fn schema(reference: SchemaReference) -> Self {
        Self {
            kind: ReferenceType::SchemaRef,
            table: None,
            span: reference.span,
            alias_reference: None,
            schema_reference: Some(reference),
        }
    }

    /// Name of the qualifying schema, if any.
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_reference.as_ref().map(|s| s.schema.as_str())
    }

    /// Alias text, if the table was aliased.
    pub fn alias(&self) -> Option<&str> {
        self.alias_reference.as_ref().map(|a| a.alias.as_str())
    }

    /// Shifts every span by `delta` characters.
    pub(crate) fn offset_by(mut self, delta: usize) -> Self {
        self.span = self.span.offset_by(delta);
        if let Some(alias) = self.alias_reference.as_mut() {
            alias.span = alias.span.offset_by(delta);
        }
        if let Some(schema) = self.schema_reference.as_mut() {
            schema.span = schema.span.offset_by(delta);
        }
        self
    }
}
