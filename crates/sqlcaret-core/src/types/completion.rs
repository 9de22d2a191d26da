use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category of a completion suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CompletionItemKind {
    Keyword,
    Column,
    Table,
}

/// A single suggestion offered at the caret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Text to insert, e.g. `SELECT`, `RELEASE SAVEPOINT` or `users`.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: CompletionItemKind,
}

impl CompletionItem {
    pub fn keyword(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CompletionItemKind::Keyword,
        }
    }

    pub fn column(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CompletionItemKind::Column,
        }
    }

    pub fn table(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CompletionItemKind::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(CompletionItem::column("email")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "email", "type": "column" }));
    }
}
