use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A character range in the source SQL string.
///
/// Offsets count Unicode scalar values, matching the caret offsets accepted by
/// [`crate::MySqlAutocomplete::autocomplete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    /// Character offset from start of SQL string (inclusive)
    pub start: usize,
    /// Character offset from start of SQL string (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true when `offset` falls inside the half-open range.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Shifts the range right by `delta` characters.
    pub fn offset_by(self, delta: usize) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }
}
