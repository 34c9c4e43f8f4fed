use std::fmt;
use std::str::FromStr;

use super::{Point, parse_point_list, write_point_list};
use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// `polygon`: `((x1,y1),...)`, always closed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let body = literal
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| ParseError::literal(Self::KIND, literal, "expected (...)"))?;
        Ok(Self::new(parse_point_list(Self::KIND, literal, body)?))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::from("(");
        write_point_list(&mut out, &self.points);
        out.push(')');
        f.write_str(&out)
    }
}

impl FromStr for Polygon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Polygon {
    const KIND: &'static str = "polygon";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Polygon {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl PgType for Polygon {
    const PG_TYPE: &'static str = "polygon";
    const ARRAY_TYPE: &'static str = "polygon[]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_print() {
        let polygon = Polygon::decode("((0,0),(4,0),(4,3))").unwrap();
        assert_eq!(polygon.points[2], Point::new(4.0, 3.0));
        assert_eq!(polygon.encode(), "((0,0),(4,0),(4,3))");
    }

    #[test]
    fn builder() {
        let polygon = Polygon::default()
            .with_point(Point::new(0.0, 0.0))
            .with_point(Point::new(1.0, 0.5));
        assert_eq!(polygon.encode(), "((0,0),(1,0.5))");
    }

    #[test]
    fn malformed() {
        assert_eq!(Polygon::decode("[(0,0)]").unwrap_err().kind(), "polygon");
        assert_eq!(Polygon::decode("((0,0),(1))").unwrap_err().kind(), "polygon");
    }
}
