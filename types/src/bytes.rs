//! `bytea` in hex output format.

use std::fmt::{self, Write};
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

const HEX_PREFIX: &str = "\\x";

/// Binary data written as `\x0a1b`.
///
/// Decoding accepts the digits with or without the `\x` prefix, in either
/// case, with surrounding whitespace ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix(HEX_PREFIX)
            .or_else(|| trimmed.strip_prefix("\\X"))
            .unwrap_or(trimmed);
        if digits.len() % 2 != 0 {
            return Err(ParseError::literal(Self::KIND, text, "odd number of hex digits"));
        }
        digits
            .as_bytes()
            .chunks(2)
            .map(|pair| match (hex_value(pair[0]), hex_value(pair[1])) {
                (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
                _ => Err(ParseError::literal(Self::KIND, text, "invalid hex digit")),
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self)
    }

    /// Lowercase hex digits without the prefix.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(self.0.len() * 2);
        for byte in &self.0 {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }

    /// Replaces the content from hex text.
    pub fn set_hex(&mut self, text: &str) -> Result<()> {
        *self = Self::from_hex(text)?;
        Ok(())
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|v| v as u8)
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEX_PREFIX)?;
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HexBytes {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl FromLiteral for HexBytes {
    const KIND: &'static str = "bytea";

    fn from_literal(token: &str) -> Result<Self> {
        Self::from_hex(token)
    }
}

impl ToLiteral for HexBytes {
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl PgType for HexBytes {
    const PG_TYPE: &'static str = "bytea";
    const ARRAY_TYPE: &'static str = "bytea[]";
}
