//! Full text search documents and queries: `tsvector`, `tsquery`.
//!
//! Both are kept as PostgreSQL renders them. Normalization (stemming, stop
//! words, weights) happens server side, so the codec does not try to
//! reproduce it.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// A `tsvector` document such as `'fat':2 'rat':3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TsVector(String);

impl TsVector {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Appends raw lexeme text, space separated.
    pub fn append(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        if !self.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(raw);
    }

    /// The lexemes in document order, without positions or weights.
    ///
    /// Quoted lexemes have `''` and backslash escapes resolved.
    pub fn lexemes(&self) -> Vec<String> {
        let mut lexemes = Vec::new();
        let mut chars = self.0.chars().peekable();
        while let Some(&ch) = chars.peek() {
            if ch.is_whitespace() {
                chars.next();
                continue;
            }

            let mut lexeme = String::new();
            if ch == '\'' {
                chars.next();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => lexeme.extend(chars.next()),
                        '\'' if chars.peek() == Some(&'\'') => {
                            chars.next();
                            lexeme.push('\'');
                        }
                        '\'' => break,
                        c => lexeme.push(c),
                    }
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == ':' {
                        break;
                    }
                    lexeme.push(c);
                    chars.next();
                }
            }

            // position list, e.g. `:1,4B`
            while chars.peek().is_some_and(|c| !c.is_whitespace()) {
                chars.next();
            }
            lexemes.push(lexeme);
        }
        lexemes
    }
}

impl fmt::Display for TsVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TsVector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl FromLiteral for TsVector {
    const KIND: &'static str = "tsvector";

    fn from_literal(token: &str) -> Result<Self> {
        Ok(Self::new(token.trim()))
    }
}

impl ToLiteral for TsVector {
    fn to_literal(&self) -> String {
        self.0.clone()
    }
}

impl PgType for TsVector {
    const PG_TYPE: &'static str = "tsvector";
    const ARRAY_TYPE: &'static str = "tsvector[]";
}

/// A `tsquery` such as `fat & (rat | cat)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TsQuery(String);

impl TsQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn combine(self, op: &str, other: TsQuery) -> TsQuery {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => other,
            (_, true) => self,
            _ => TsQuery(format!("({}) {op} ({})", self.0, other.0)),
        }
    }

    /// `(self) & (other)`; an empty side yields the other one.
    pub fn and(self, other: TsQuery) -> TsQuery {
        self.combine("&", other)
    }

    /// `(self) | (other)`; an empty side yields the other one.
    pub fn or(self, other: TsQuery) -> TsQuery {
        self.combine("|", other)
    }

    /// `(self) <-> (other)`: `other` directly follows `self`.
    pub fn followed_by(self, other: TsQuery) -> TsQuery {
        self.combine("<->", other)
    }

    pub fn negate(self) -> TsQuery {
        if self.is_empty() {
            return self;
        }
        TsQuery(format!("!({})", self.0))
    }
}

impl fmt::Display for TsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TsQuery {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl FromLiteral for TsQuery {
    const KIND: &'static str = "tsquery";

    fn from_literal(token: &str) -> Result<Self> {
        Ok(Self::new(token.trim()))
    }
}

impl ToLiteral for TsQuery {
    fn to_literal(&self) -> String {
        self.0.clone()
    }
}

impl PgType for TsQuery {
    const PG_TYPE: &'static str = "tsquery";
    const ARRAY_TYPE: &'static str = "tsquery[]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexemes_skip_positions() {
        let doc = TsVector::from_literal("'a':1 'fat':2,4B 'rat':3 cat").unwrap();
        assert_eq!(doc.lexemes(), vec!["a", "fat", "rat", "cat"]);
        assert_eq!(doc.to_literal(), "'a':1 'fat':2,4B 'rat':3 cat");
    }

    #[test]
    fn quoted_lexemes_unescape() {
        let doc = TsVector::new(r"'don''t' 'back\\slash' 'two words'");
        assert_eq!(doc.lexemes(), vec!["don't", r"back\slash", "two words"]);
        assert!(TsVector::new("   ").lexemes().is_empty());
    }

    #[test]
    fn append_separates_with_space() {
        let mut doc = TsVector::default();
        doc.append("'fat':1");
        doc.append("  ");
        doc.append("'rat':2");
        assert_eq!(doc.as_str(), "'fat':1 'rat':2");
        assert_eq!(doc.to_element(), r#""'fat':1 'rat':2""#);
    }

    #[test]
    fn query_combinators() {
        let fat = TsQuery::new("fat");
        let rat = TsQuery::new("rat");
        assert_eq!(fat.clone().and(rat.clone()).as_str(), "(fat) & (rat)");
        assert_eq!(fat.clone().or(rat.clone()).as_str(), "(fat) | (rat)");
        assert_eq!(fat.clone().followed_by(rat).as_str(), "(fat) <-> (rat)");
        assert_eq!(fat.clone().negate().as_str(), "!(fat)");
        assert_eq!(TsQuery::default().and(fat.clone()), fat);
        assert_eq!(fat.clone().or(TsQuery::new(" ")), fat);
        assert_eq!("  cat:* ".parse::<TsQuery>().unwrap().as_str(), "cat:*");
    }
}
