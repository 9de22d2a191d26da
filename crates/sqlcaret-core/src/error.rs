//! Error types for caret completion.
//!
//! # Error Handling Strategy
//!
//! Completion is tolerant by construction: malformed or half-typed SQL is the normal
//! input, so tokenizer failures are recovered inside the lexer and grammar mismatches
//! simply produce fewer candidates. Unknown tables and columns are likewise not errors,
//! they just leave a category empty.
//!
//! [`CompletionError`] is reserved for misuse of the API itself: offsets outside the
//! text under the strict policy, oversized input, and invalid configuration values.

use thiserror::Error;

/// Error returned when a completion request cannot be served.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The caret offset lies beyond the end of the text and clamping is disabled.
    #[error("caret offset {offset} is outside the text (length {length})")]
    OffsetOutOfRange { offset: usize, length: usize },

    /// The text exceeds the maximum accepted input size.
    #[error("SQL exceeds maximum length of {max} bytes ({length} bytes provided)")]
    InputTooLarge { length: usize, max: usize },

    /// A server version string could not be parsed.
    #[error("invalid server version '{0}', expected <major>.<minor>.<patch>")]
    InvalidServerVersion(String),

    /// A schema catalog document could not be deserialized.
    #[error("invalid schema catalog: {0}")]
    InvalidSchema(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = CompletionError::OffsetOutOfRange {
            offset: 20,
            length: 16,
        };
        assert_eq!(
            err.to_string(),
            "caret offset 20 is outside the text (length 16)"
        );

        let err = CompletionError::InvalidServerVersion("eight".to_string());
        assert!(err.to_string().contains("'eight'"));
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CompletionError = json_err.into();
        assert!(matches!(err, CompletionError::InvalidSchema(_)));
    }
}
