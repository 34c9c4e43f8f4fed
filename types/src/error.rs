use thiserror::Error;

/// Error raised while decoding a PostgreSQL text literal.
///
/// Every variant names the target kind and carries the offending text so a
/// caller scanning many rows can report exactly which value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A composite literal (range, array, geometric shape, ...) is malformed:
    /// missing bracket, missing separator, bad nesting.
    #[error("invalid {kind} literal {literal:?}: {reason}")]
    Literal {
        kind: &'static str,
        literal: String,
        reason: &'static str,
    },

    /// A scalar token could not be converted to the target kind.
    #[error("cannot parse {token:?} as {kind}: {detail}")]
    Token {
        kind: &'static str,
        token: String,
        detail: String,
    },

    /// Strict array decoding hit an element that does not parse.
    #[error("{kind} array element {index} is invalid: {source}")]
    Element {
        kind: &'static str,
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub fn literal(kind: &'static str, literal: &str, reason: &'static str) -> Self {
        ParseError::Literal {
            kind,
            literal: literal.to_string(),
            reason,
        }
    }

    pub fn token(kind: &'static str, token: &str, detail: impl ToString) -> Self {
        ParseError::Token {
            kind,
            token: token.to_string(),
            detail: detail.to_string(),
        }
    }

    /// The kind of value that failed to decode.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Literal { kind, .. }
            | ParseError::Token { kind, .. }
            | ParseError::Element { kind, .. } => kind,
        }
    }
}

/// Error raised by dynamic, type-name driven decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No built-in conversion and no registered custom codec for this type.
    #[error("no codec for PostgreSQL type {pg_type:?}")]
    UnsupportedType { pg_type: String },
}

/// Result type for codec operations
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
