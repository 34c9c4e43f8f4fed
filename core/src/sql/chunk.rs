use std::borrow::Cow;
use std::fmt::Write;

use crate::{Param, SQLParam, sql::tokens::Token};

/// A SQL chunk represents a part of an SQL statement.
///
/// - `Token` - SQL keywords and punctuation (AND, IN, (, =, etc.)
/// - `Ident` - Quoted identifiers ("table_name", "column_name")
/// - `Raw` - Unquoted raw SQL text (function names, operators, casts)
/// - `Param` - Bound parameter, rendered as a `$n` placeholder
#[derive(Clone)]
pub enum SQLChunk<'a, V: SQLParam> {
    /// SQL keywords and punctuation
    /// Renders as: keyword with automatic spacing rules
    Token(Token),

    /// Quoted identifier for user-provided names
    /// Renders as: "name" (with quotes, embedded quotes doubled)
    Ident(Cow<'a, str>),

    /// Raw SQL text (unquoted)
    /// Renders as: text (as-is)
    /// Use for: function names, provider operators like `@>`, `::json` casts
    Raw(Cow<'a, str>),

    /// Parameter with value
    /// Renders as: $1, $2, ... numbered at render time
    Param(Param<'a, V>),
}

impl<'a, V: SQLParam> SQLChunk<'a, V> {
    // ==================== const constructors ====================

    /// Creates a token chunk - const
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    /// Creates a quoted identifier from a static string - const
    #[inline]
    pub const fn ident_static(name: &'static str) -> Self {
        Self::Ident(Cow::Borrowed(name))
    }

    /// Creates raw SQL text from a static string - const
    #[inline]
    pub const fn raw_static(text: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(text))
    }

    // ==================== non-const constructors ====================

    /// Creates a quoted identifier from a runtime string
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Ident(name.into())
    }

    /// Creates raw SQL text from a runtime string
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Creates a parameter chunk
    #[inline]
    pub fn param(value: impl Into<Cow<'a, V>>) -> Self {
        Self::Param(Param::new(value))
    }

    // ==================== write implementation ====================

    /// Write chunk content to buffer. Params are written by the caller, which
    /// owns the placeholder counter.
    pub(crate) fn write(&self, buf: &mut impl Write) {
        match self {
            SQLChunk::Token(token) => {
                let _ = buf.write_str(token.as_str());
            }
            SQLChunk::Ident(name) => {
                let _ = buf.write_char('"');
                for ch in name.chars() {
                    if ch == '"' {
                        let _ = buf.write_char('"');
                    }
                    let _ = buf.write_char(ch);
                }
                let _ = buf.write_char('"');
            }
            SQLChunk::Raw(text) => {
                let _ = buf.write_str(text);
            }
            SQLChunk::Param(_) => {
                let _ = buf.write_char('?');
            }
        }
    }

    /// Raw text ending in an identifier character, i.e. a function name.
    #[inline]
    fn is_function_name(&self) -> bool {
        matches!(self, SQLChunk::Raw(text)
            if text.chars().next_back().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_'))
    }
}

/// Spacing rules for chunk rendering.
///
/// Everything is separated by one space except around punctuation, casts
/// and calls: `f(a, b)`, `"t"."c"::json`, `CAST(x AS numeric)`,
/// `ARRAY[$1, $2]`.
pub(crate) fn chunk_needs_space<V: SQLParam>(
    current: &SQLChunk<'_, V>,
    next: &SQLChunk<'_, V>,
) -> bool {
    // No space if current raw text ends with space
    if let SQLChunk::Raw(text) = current
        && text.ends_with(' ')
    {
        return false;
    }

    // No space before raw text that starts with space or is a `::` cast
    if let SQLChunk::Raw(text) = next
        && (text.starts_with(' ') || text.starts_with("::"))
    {
        return false;
    }

    match (current, next) {
        // No space before closing/separator punctuation
        (_, SQLChunk::Token(Token::RPAREN | Token::RBRACKET | Token::COMMA | Token::DOT)) => false,
        // No space after opening punctuation
        (SQLChunk::Token(Token::LPAREN | Token::LBRACKET | Token::DOT), _) => false,
        // Calls: CAST(, ANY(, ARRAY[
        (SQLChunk::Token(t), SQLChunk::Token(Token::LPAREN | Token::LBRACKET)) if t.is_call_like() => {
            false
        }
        (current, SQLChunk::Token(Token::LPAREN)) => !current.is_function_name(),
        _ => true,
    }
}

impl<'a, V: SQLParam> core::fmt::Debug for SQLChunk<'a, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SQLChunk::Token(token) => f.debug_tuple("Token").field(token).finish(),
            SQLChunk::Ident(name) => f.debug_tuple("Ident").field(name).finish(),
            SQLChunk::Raw(text) => f.debug_tuple("Raw").field(text).finish(),
            SQLChunk::Param(param) => f.debug_tuple("Param").field(&param.value).finish(),
        }
    }
}

// ==================== From implementations ====================

impl<'a, V: SQLParam> From<Token> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: Token) -> Self {
        Self::Token(value)
    }
}

impl<'a, V: SQLParam> From<Param<'a, V>> for SQLChunk<'a, V> {
    #[inline]
    fn from(value: Param<'a, V>) -> Self {
        Self::Param(value)
    }
}
