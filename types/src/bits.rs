//! `bit` / `bit varying` values.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// A string of bits in PostgreSQL text form, e.g. `10110`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BitString(String);

impl BitString {
    pub fn new(bits: &str) -> Result<Self> {
        Self::decode(bits)
    }

    pub fn from_bools<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Self(bits.into_iter().map(|b| if b { '1' } else { '0' }).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.as_bytes().get(index).map(|b| *b == b'1')
    }

    pub fn with_appended(mut self, bit: bool) -> Self {
        self.0.push(if bit { '1' } else { '0' });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accepts plain `0101` text and the `B'0101'` constant form.
    pub fn decode(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        let bits = trimmed
            .strip_prefix("B'")
            .or_else(|| trimmed.strip_prefix("b'"))
            .and_then(|s| s.strip_suffix('\''))
            .unwrap_or(trimmed);
        if let Some(bad) = bits.chars().find(|c| !matches!(c, '0' | '1')) {
            return Err(ParseError::token(
                Self::KIND,
                literal,
                format!("unexpected character {bad:?}"),
            ));
        }
        Ok(Self(bits.to_string()))
    }

    pub fn encode(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BitString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for BitString {
    const KIND: &'static str = "varbit";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for BitString {
    fn to_literal(&self) -> String {
        self.encode()
    }

    fn to_element(&self) -> String {
        self.encode()
    }
}

impl PgType for BitString {
    const PG_TYPE: &'static str = "varbit";
    const ARRAY_TYPE: &'static str = "varbit[]";
}

#[cfg(feature = "bit-vec")]
impl From<&BitString> for bit_vec::BitVec {
    fn from(bits: &BitString) -> Self {
        bits.iter().collect()
    }
}

#[cfg(feature = "bit-vec")]
impl From<&bit_vec::BitVec> for BitString {
    fn from(bits: &bit_vec::BitVec) -> Self {
        BitString::from_bools(bits.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_print() {
        let bits = BitString::decode("10110").unwrap();
        assert_eq!(bits.len(), 5);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(9), None);
        assert_eq!(bits.encode(), "10110");
        assert_eq!(BitString::decode("B'01'").unwrap().as_str(), "01");
    }

    #[test]
    fn rejects_non_bits() {
        let err = BitString::decode("1021").unwrap_err();
        assert_eq!(err.kind(), "varbit");
    }

    #[test]
    fn builders() {
        let bits = BitString::from_bools([true, false]).with_appended(true);
        assert_eq!(bits.to_string(), "101");
        assert!(BitString::default().is_empty());
    }

    #[cfg(feature = "bit-vec")]
    #[test]
    fn bit_vec_conversion() {
        let bits = BitString::decode("1001").unwrap();
        let vec: bit_vec::BitVec = (&bits).into();
        assert_eq!(vec.len(), 4);
        assert_eq!(BitString::from(&vec), bits);
    }
}
