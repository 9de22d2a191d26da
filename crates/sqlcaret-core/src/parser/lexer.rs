//! Tokenization of MySQL text into grammar terminals.
//!
//! `sqlparser`'s tokenizer does the character-level work; this module maps its
//! tokens onto [`TokenKind`]s, keeps whitespace and comments on a hidden channel,
//! converts line/column locations to character offsets and always terminates the
//! stream with an `EOF` token.

use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Location, Token as SqlToken, TokenWithSpan, Tokenizer, Whitespace};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::grammar::TokenKind;
use crate::types::{ParserOptions, Span, SqlMode};

/// Token channel, mirroring the default/hidden split of grammar-driven lexers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Default,
    Hidden,
}

/// A lexed token with its position in the stream and the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub channel: Channel,
    /// Verbatim source text (quotes included).
    pub text: String,
    pub span: Span,
    /// Index in the token stream, hidden tokens included.
    pub index: usize,
}

impl Token {
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }
}

/// The full token stream of a text, hidden tokens included, ending in `EOF`.
#[derive(Debug, Clone)]
pub struct TokenStream {
    source: String,
    char_len: usize,
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Length of the source in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Source text from character `offset` to the end.
    pub fn text_from(&self, offset: usize) -> &str {
        match self.source.char_indices().nth(offset) {
            Some((byte, _)) => &self.source[byte..],
            None => "",
        }
    }

    /// Tokens on the default channel, in order.
    pub fn default_channel(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_hidden())
    }
}

/// Tokenizes `sql` for the given parser options. Never fails: text the tokenizer
/// rejects becomes a single trailing `INVALID_INPUT` token.
pub fn tokenize(sql: &str, options: &ParserOptions) -> TokenStream {
    let chars: Vec<char> = sql.chars().collect();
    let char_len = chars.len();

    let mut limit = char_len;
    let raw = loop {
        let prefix: String = chars[..limit].iter().collect();
        match run_tokenizer(&prefix) {
            Ok(tokens) => break tokens,
            Err(location) => {
                let failed_at = LineIndex::new(&prefix).offset(location);
                #[cfg(feature = "tracing")]
                debug!(limit, failed_at, "tokenizer error, retrying with shorter prefix");
                limit = failed_at.min(limit.saturating_sub(1));
            }
        }
    };

    let prefix: String = chars[..limit].iter().collect();
    let lines = LineIndex::new(&prefix);
    let mut tokens = Vec::with_capacity(raw.len() + 2);
    for token in raw {
        let start = lines.offset(token.span.start).min(limit);
        let end = lines.offset(token.span.end).clamp(start, limit);
        let (kind, channel) = classify(&token.token, options);
        tokens.push(Token {
            kind,
            channel,
            text: chars[start..end].iter().collect(),
            span: Span::new(start, end),
            index: tokens.len(),
        });
    }

    if limit < char_len {
        tokens.push(Token {
            kind: TokenKind::Invalid,
            channel: Channel::Default,
            text: chars[limit..].iter().collect(),
            span: Span::new(limit, char_len),
            index: tokens.len(),
        });
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        channel: Channel::Default,
        text: String::new(),
        span: Span::new(char_len, char_len),
        index: tokens.len(),
    });

    TokenStream {
        source: sql.to_string(),
        char_len,
        tokens,
    }
}

fn run_tokenizer(sql: &str) -> Result<Vec<TokenWithSpan>, Location> {
    let dialect = MySqlDialect {};
    let mut tokenizer = Tokenizer::new(&dialect, sql);
    tokenizer
        .tokenize_with_location()
        .map_err(|err| err.location)
}

fn classify(token: &SqlToken, options: &ParserOptions) -> (TokenKind, Channel) {
    let kind = match token {
        SqlToken::Whitespace(Whitespace::SingleLineComment { .. })
        | SqlToken::Whitespace(Whitespace::MultiLineComment(_)) => {
            return (TokenKind::Comment, Channel::Hidden)
        }
        SqlToken::Whitespace(_) => return (TokenKind::Whitespace, Channel::Hidden),
        SqlToken::Word(word) => match word.quote_style {
            Some('`') => TokenKind::BackTickQuotedId,
            Some(_) => TokenKind::Identifier,
            None => match TokenKind::from_keyword(&word.value) {
                Some(TokenKind::Not) if options.has_mode(SqlMode::HighNotPrecedence) => {
                    TokenKind::Not2
                }
                Some(keyword) => keyword,
                None => TokenKind::Identifier,
            },
        },
        SqlToken::Number(text, _) => {
            if text.contains(['e', 'E']) {
                TokenKind::FloatNumber
            } else if text.contains('.') {
                TokenKind::DecimalNumber
            } else {
                TokenKind::IntNumber
            }
        }
        SqlToken::SingleQuotedString(_) | SqlToken::EscapedStringLiteral(_) => {
            TokenKind::SingleQuotedText
        }
        SqlToken::DoubleQuotedString(_) => {
            if options.has_mode(SqlMode::AnsiQuotes) {
                TokenKind::Identifier
            } else {
                TokenKind::DoubleQuotedText
            }
        }
        SqlToken::NationalStringLiteral(_) => TokenKind::NcharText,
        SqlToken::HexStringLiteral(_) => TokenKind::HexNumber,
        SqlToken::SingleQuotedByteStringLiteral(_) => TokenKind::BinNumber,
        SqlToken::Eq | SqlToken::DoubleEq => TokenKind::Equal,
        SqlToken::Assignment => TokenKind::Assign,
        SqlToken::Spaceship => TokenKind::NullSafeEqual,
        SqlToken::GtEq => TokenKind::GreaterOrEqual,
        SqlToken::Gt => TokenKind::Greater,
        SqlToken::LtEq => TokenKind::LessOrEqual,
        SqlToken::Lt => TokenKind::Less,
        SqlToken::Neq => TokenKind::NotEqual,
        SqlToken::Plus => TokenKind::Plus,
        SqlToken::Minus => TokenKind::Minus,
        SqlToken::Mul => TokenKind::Mult,
        SqlToken::Div => TokenKind::Divide,
        SqlToken::Mod => TokenKind::Modulo,
        SqlToken::ExclamationMark => TokenKind::LogicalNot,
        SqlToken::Tilde => TokenKind::BitwiseNot,
        SqlToken::ShiftLeft => TokenKind::ShiftLeft,
        SqlToken::ShiftRight => TokenKind::ShiftRight,
        SqlToken::Overlap => TokenKind::LogicalAnd,
        SqlToken::Ampersand => TokenKind::BitwiseAnd,
        SqlToken::Caret => TokenKind::BitwiseXor,
        SqlToken::StringConcat => {
            if options.has_mode(SqlMode::PipesAsConcat) {
                TokenKind::ConcatPipes
            } else {
                TokenKind::LogicalOr
            }
        }
        SqlToken::Pipe => TokenKind::BitwiseOr,
        SqlToken::Period => TokenKind::Dot,
        SqlToken::Comma => TokenKind::Comma,
        SqlToken::SemiColon => TokenKind::Semicolon,
        SqlToken::Colon => TokenKind::Colon,
        SqlToken::LParen => TokenKind::OpenPar,
        SqlToken::RParen => TokenKind::ClosePar,
        SqlToken::LBrace => TokenKind::OpenCurly,
        SqlToken::RBrace => TokenKind::CloseCurly,
        SqlToken::AtSign => TokenKind::AtSign,
        SqlToken::Placeholder(text) if text == "?" => TokenKind::ParamMarker,
        SqlToken::Placeholder(_) => TokenKind::Identifier,
        SqlToken::Arrow => TokenKind::JsonSeparator,
        SqlToken::LongArrow => TokenKind::JsonUnquotedSeparator,
        _ => TokenKind::Invalid,
    };
    (kind, Channel::Default)
}

/// Converts `sqlparser` line/column locations into character offsets.
struct LineIndex {
    line_starts: Vec<usize>,
    char_len: usize,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut char_len = 0;
        for ch in text.chars() {
            char_len += 1;
            if ch == '\n' {
                line_starts.push(char_len);
            }
        }
        Self {
            line_starts,
            char_len,
        }
    }

    /// Lines and columns are 1-based. Unknown locations map to the end of text.
    fn offset(&self, location: Location) -> usize {
        if location.line == 0 || location.column == 0 {
            return self.char_len;
        }
        match self.line_starts.get(location.line as usize - 1) {
            Some(start) => (start + location.column as usize - 1).min(self.char_len),
            None => self.char_len,
        }
    }
}
