//! Homogeneous one-dimensional arrays in PostgreSQL `{a,b,c}` syntax.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::literal::tokenize;
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// What array decoding does with an element that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecodeMode {
    /// Skip the element and keep going. The decoded array is shorter than
    /// the literal.
    #[default]
    Lossy,
    /// Fail on the first bad element.
    Strict,
}

/// An ordered sequence of values of one kind.
///
/// Collection helpers return a fresh array and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Array<T>(Vec<T>);

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Array<T> {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Appends in place.
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    pub fn with_appended(mut self, value: T) -> Self {
        self.0.push(value);
        self
    }

    /// Replaces the element at `index`. Out of range indexes leave the array
    /// unchanged.
    pub fn with_set(mut self, index: usize, value: T) -> Self {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
        self
    }
}

impl<T: PartialEq> Array<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.0.iter().position(|v| v == value)
    }
}

impl<T: Clone> Array<T> {
    /// Keeps the elements for which `predicate` returns true.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.0.iter().filter(|v| predicate(v)).cloned().collect()
    }

    pub fn reverse(&self) -> Self {
        self.0.iter().rev().cloned().collect()
    }

    /// Drops the element at `index`; an out of range index returns an
    /// unchanged copy.
    pub fn remove_at(&self, index: usize) -> Self {
        let mut out = self.0.clone();
        if index < out.len() {
            out.remove(index);
        }
        Self(out)
    }
}

impl<T: Clone + PartialEq> Array<T> {
    /// Drops every element equal to `value`.
    pub fn remove(&self, value: &T) -> Self {
        self.filter(|v| v != value)
    }

    /// Drops repeated elements, keeping the first occurrence of each.
    pub fn unique(&self) -> Self {
        let mut out: Vec<T> = Vec::with_capacity(self.0.len());
        for value in &self.0 {
            if !out.contains(value) {
                out.push(value.clone());
            }
        }
        Self(out)
    }
}

impl<T: FromLiteral> Array<T> {
    /// Lossy decode: elements that fail to parse are skipped.
    pub fn decode(literal: &str) -> Self {
        let mut out = Vec::new();
        for token in tokenize(literal) {
            match T::from_literal(&token) {
                Ok(value) => out.push(value),
                Err(_error) => {
                    crate::pgext_trace_skip!(T::KIND, &token, &_error);
                }
            }
        }
        Self(out)
    }

    /// Decodes every element or reports the first one that does not parse.
    pub fn decode_strict(literal: &str) -> Result<Self> {
        tokenize(literal)
            .iter()
            .enumerate()
            .map(|(index, token)| {
                T::from_literal(token).map_err(|source| ParseError::Element {
                    kind: T::KIND,
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }

    pub fn decode_with(literal: &str, mode: DecodeMode) -> Result<Self> {
        match mode {
            DecodeMode::Lossy => Ok(Self::decode(literal)),
            DecodeMode::Strict => Self::decode_strict(literal),
        }
    }
}

impl<T: ToLiteral> Array<T> {
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl<T: ToLiteral> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&value.to_element())?;
        }
        f.write_str("}")
    }
}

impl<T: FromLiteral> FromStr for Array<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode_strict(s)
    }
}

impl<T: FromLiteral> FromLiteral for Array<T> {
    const KIND: &'static str = T::KIND;

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode_strict(token)
    }
}

impl<T: ToLiteral> ToLiteral for Array<T> {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl<T: PgType> PgType for Array<T> {
    const PG_TYPE: &'static str = T::ARRAY_TYPE;
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Self(values.into())
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self {
        array.0
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
