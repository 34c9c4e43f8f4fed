use std::fmt;
use std::str::FromStr;

use super::{Point, parse_coord, parse_coords};
use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// `circle`: `<(x,y),r>`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    pub fn with_radius(self, radius: f64) -> Self {
        Self { radius, ..self }
    }

    /// Boundary included.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let body = literal.trim();
        let body = body
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(body);
        let (center, radius) = body
            .split_once("),")
            .ok_or_else(|| ParseError::literal(Self::KIND, literal, "expected <(x,y),r>"))?;
        let center = center
            .trim()
            .strip_prefix('(')
            .ok_or_else(|| ParseError::literal(Self::KIND, literal, "expected (x,y) center"))?;
        Ok(Self::new(
            parse_coords(Self::KIND, literal, center)?,
            parse_coord(Self::KIND, radius)?,
        ))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.center, self.radius.to_literal())
    }
}

impl FromStr for Circle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Circle {
    const KIND: &'static str = "circle";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Circle {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl PgType for Circle {
    const PG_TYPE: &'static str = "circle";
    const ARRAY_TYPE: &'static str = "circle[]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_print() {
        let circle = Circle::decode("<(1,2),3.5>").unwrap();
        assert_eq!(circle, Circle::new(Point::new(1.0, 2.0), 3.5));
        assert_eq!(circle.encode(), "<(1,2),3.5>");
        // brackets are optional on input
        assert_eq!(Circle::decode("(1,2),3.5").unwrap(), circle);
    }

    #[test]
    fn malformed() {
        assert_eq!(Circle::decode("<(1,2)>").unwrap_err().kind(), "circle");
        assert_eq!(Circle::decode("<(1,2),r>").unwrap_err().kind(), "circle");
    }

    #[test]
    fn editors_and_containment() {
        let circle = Circle::default().with_radius(2.0).with_center(Point::new(1.0, 1.0));
        assert!(circle.contains_point(&Point::new(2.0, 2.0)));
        assert!(!circle.contains_point(&Point::new(3.0, 3.0)));
    }
}
