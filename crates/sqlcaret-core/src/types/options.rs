use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SchemaCatalog;
use crate::error::CompletionError;

/// A MySQL server version, used to gate version-dependent grammar.
///
/// Stored in MySQL's numeric form (`8.0.16` is `80016`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerVersion(u32);

impl ServerVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self(major * 10_000 + minor * 100 + patch)
    }

    pub const fn from_number(number: u32) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u32 {
        self.0
    }
}

impl Default for ServerVersion {
    fn default() -> Self {
        Self::new(8, 0, 0)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.0 / 10_000,
            (self.0 / 100) % 100,
            self.0 % 100
        )
    }
}

impl FromStr for ServerVersion {
    type Err = CompletionError;

    /// Parses `major.minor[.patch]`, ignoring any suffix after the patch
    /// number (`8.0.36-log`).
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || CompletionError::InvalidServerVersion(text.to_string());
        let mut parts = text.trim().splitn(3, '.');
        let mut component = |required: bool| -> Result<u32, CompletionError> {
            match parts.next() {
                Some(part) => {
                    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
                    digits.parse().map_err(|_| invalid())
                }
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };
        let major = component(true)?;
        let minor = component(true)?;
        let patch = component(false)?;
        if minor > 99 || patch > 99 {
            return Err(invalid());
        }
        Ok(Self::new(major, minor, patch))
    }
}

impl TryFrom<String> for ServerVersion {
    type Error = CompletionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ServerVersion> for String {
    fn from(version: ServerVersion) -> Self {
        version.to_string()
    }
}

/// SQL modes that change how statements are tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlMode {
    /// `"text"` is a quoted identifier instead of a string literal.
    AnsiQuotes,
    /// `NOT` binds tighter, lexed as a distinct `NOT2` terminal.
    HighNotPrecedence,
    /// `||` concatenates instead of meaning logical OR.
    PipesAsConcat,
}

impl SqlMode {
    /// Parses a MySQL `sql_mode` value such as `"ANSI_QUOTES,STRICT_TRANS_TABLES"`.
    ///
    /// Modes that do not affect tokenization are skipped. The `ANSI` combination
    /// mode expands to the quoting and concatenation modes it implies.
    pub fn parse_list(value: &str) -> Vec<SqlMode> {
        let mut modes = Vec::new();
        for name in value.split(',').map(|part| part.trim().to_ascii_uppercase()) {
            let expanded: &[SqlMode] = match name.as_str() {
                "ANSI_QUOTES" => &[SqlMode::AnsiQuotes],
                "HIGH_NOT_PRECEDENCE" => &[SqlMode::HighNotPrecedence],
                "PIPES_AS_CONCAT" => &[SqlMode::PipesAsConcat],
                "ANSI" => &[SqlMode::AnsiQuotes, SqlMode::PipesAsConcat],
                _ => &[],
            };
            for mode in expanded {
                if !modes.contains(mode) {
                    modes.push(*mode);
                }
            }
        }
        modes
    }
}

/// Options forwarded to the grammar parser and candidate collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    #[serde(default)]
    #[schemars(with = "String")]
    pub server_version: ServerVersion,
    #[serde(default)]
    pub sql_modes: Vec<SqlMode>,
}

impl ParserOptions {
    pub fn with_server_version(mut self, version: ServerVersion) -> Self {
        self.server_version = version;
        self
    }

    pub fn with_sql_mode(mut self, mode: SqlMode) -> Self {
        if !self.sql_modes.contains(&mode) {
            self.sql_modes.push(mode);
        }
        self
    }

    pub fn has_mode(&self, mode: SqlMode) -> bool {
        self.sql_modes.contains(&mode)
    }
}

/// What to do with a caret offset past the end of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum OffsetPolicy {
    /// Treat the offset as the end of the text.
    #[default]
    Clamp,
    /// Reject the request with [`CompletionError::OffsetOutOfRange`].
    Strict,
}

/// Configuration of a [`crate::MySqlAutocomplete`] instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteOptions {
    /// Emit keywords upper-cased (`SELECT`) rather than lower-cased (`select`).
    #[serde(default = "default_uppercase_keywords")]
    pub uppercase_keywords: bool,
    #[serde(default)]
    pub parser_options: ParserOptions,
    /// Catalog used for table and column suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Arc<SchemaCatalog>>,
    #[serde(default)]
    pub offset_policy: OffsetPolicy,
}

fn default_uppercase_keywords() -> bool {
    true
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            uppercase_keywords: default_uppercase_keywords(),
            parser_options: ParserOptions::default(),
            schema: None,
            offset_policy: OffsetPolicy::default(),
        }
    }
}

impl AutocompleteOptions {
    pub fn with_schema(mut self, schema: impl Into<Arc<SchemaCatalog>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_uppercase_keywords(mut self, uppercase: bool) -> Self {
        self.uppercase_keywords = uppercase;
        self
    }

    pub fn with_parser_options(mut self, parser_options: ParserOptions) -> Self {
        self.parser_options = parser_options;
        self
    }

    pub fn with_offset_policy(mut self, policy: OffsetPolicy) -> Self {
        self.offset_policy = policy;
        self
    }
}
