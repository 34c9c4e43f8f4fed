//! `xml` documents, kept as text.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// An `xml` value. PostgreSQL checks well-formedness on input; the codec
/// carries the text through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Xml(String);

impl Xml {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Name of the first element, skipping the prolog, comments and
    /// processing instructions.
    pub fn root_name(&self) -> Option<&str> {
        let mut rest = self.0.as_str();
        loop {
            let start = rest.find('<')?;
            rest = &rest[start + 1..];
            match rest.chars().next()? {
                '?' | '!' => {
                    let end = rest.find('>')?;
                    rest = &rest[end + 1..];
                }
                _ => {
                    let end = rest
                        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                        .unwrap_or(rest.len());
                    return Some(&rest[..end]).filter(|name| !name.is_empty());
                }
            }
        }
    }
}

impl From<String> for Xml {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Xml {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Xml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Xml {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl FromLiteral for Xml {
    const KIND: &'static str = "xml";

    fn from_literal(token: &str) -> Result<Self> {
        Ok(Self::new(token))
    }
}

impl ToLiteral for Xml {
    fn to_literal(&self) -> String {
        self.0.clone()
    }
}

impl PgType for Xml {
    const PG_TYPE: &'static str = "xml";
    const ARRAY_TYPE: &'static str = "xml[]";
}
