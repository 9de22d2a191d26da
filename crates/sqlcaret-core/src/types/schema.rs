use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// How table names from the SQL text are compared with catalog names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CaseSensitivity {
    /// Case-sensitive as-is (MySQL on most Unix file systems)
    #[default]
    Exact,
    /// Lowercase normalization (`lower_case_table_names = 1`)
    Lower,
    /// Uppercase normalization
    Upper,
}

impl CaseSensitivity {
    pub fn normalize(&self, name: &str) -> String {
        match self {
            Self::Exact => name.to_string(),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
        }
    }

    /// Compares two identifiers under this normalization.
    pub fn matches(&self, left: &str, right: &str) -> bool {
        match self {
            Self::Exact => left == right,
            _ => self.normalize(left) == self.normalize(right),
        }
    }
}

/// Column definition inside a [`SchemaTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// A table known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTable {
    /// Owning schema (database). When absent the table matches any qualifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

impl SchemaTable {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schema: None,
            name: name.into(),
            columns: columns
                .into_iter()
                .map(|column| ColumnSchema {
                    name: column.into(),
                    data_type: None,
                })
                .collect(),
        }
    }

    pub fn in_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// Read-only description of the tables and columns available for completion.
///
/// A catalog is typically loaded once and shared across requests behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaCatalog {
    #[serde(default)]
    pub case_sensitivity: CaseSensitivity,
    #[serde(default)]
    pub tables: Vec<SchemaTable>,
}

impl SchemaCatalog {
    pub fn new(tables: impl IntoIterator<Item = SchemaTable>) -> Self {
        Self {
            case_sensitivity: CaseSensitivity::default(),
            tables: tables.into_iter().collect(),
        }
    }

    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    /// Deserializes a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CompletionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Table names in catalog order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|table| table.name.as_str())
    }

    /// Finds a table by name, honoring the schema qualifier when both sides carry one.
    pub fn find_table(&self, name: &str, schema: Option<&str>) -> Option<&SchemaTable> {
        let case = self.case_sensitivity;
        self.tables.iter().find(|table| {
            if !case.matches(&table.name, name) {
                return false;
            }
            match (table.schema.as_deref(), schema) {
                (Some(declared), Some(requested)) => case.matches(declared, requested),
                _ => true,
            }
        })
    }
}
