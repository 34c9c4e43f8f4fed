use std::fmt;
use std::str::FromStr;

use super::parse_coords;
use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// `point`: `(x,y)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance, what `<->` computes between two points.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let body = literal
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| ParseError::literal(Self::KIND, literal, "expected (x,y)"))?;
        parse_coords(Self::KIND, literal, body)
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x.to_literal(), self.y.to_literal())
    }
}

impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Point {
    const KIND: &'static str = "point";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Point {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl PgType for Point {
    const PG_TYPE: &'static str = "point";
    const ARRAY_TYPE: &'static str = "point[]";
}
