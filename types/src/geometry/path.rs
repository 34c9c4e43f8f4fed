use std::fmt;
use std::str::FromStr;

use super::{Point, parse_point_list, write_point_list};
use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// `path`: `((x1,y1),...)` when closed, `[(x1,y1),...]` when open.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub closed: bool,
    pub points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { closed, points }
    }

    pub fn open(points: Vec<Point>) -> Self {
        Self::new(points, false)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Same points, closed.
    pub fn closed(self) -> Self {
        Self {
            closed: true,
            ..self
        }
    }

    /// Same points, open.
    pub fn opened(self) -> Self {
        Self {
            closed: false,
            ..self
        }
    }

    pub fn with_points(self, points: Vec<Point>) -> Self {
        Self { points, ..self }
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let trimmed = literal.trim();
        let (closed, body) = if let Some(body) = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
        {
            (false, body)
        } else if let Some(body) = trimmed
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
        {
            (true, body)
        } else {
            return Err(ParseError::literal(Self::KIND, literal, "expected (...) or [...]"));
        };
        Ok(Self::new(parse_point_list(Self::KIND, literal, body)?, closed))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.closed { ('(', ')') } else { ('[', ']') };
        let mut out = String::new();
        out.push(open);
        write_point_list(&mut out, &self.points);
        out.push(close);
        f.write_str(&out)
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Path {
    const KIND: &'static str = "path";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Path {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl PgType for Path {
    const PG_TYPE: &'static str = "path";
    const ARRAY_TYPE: &'static str = "path[]";
}
