use std::fmt;
use std::str::FromStr;

use super::{POINT_SEPARATOR, Point, parse_coords};
use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// `box`: `(x1,y1),(x2,y2)`
///
/// The corners may be given in any order. Equality compares the
/// normalized corners, so a box survives the database reordering them.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Rect {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Upper-right corner first, lower-left second.
    pub fn normalized(&self) -> Self {
        Self {
            p1: Point::new(self.p1.x.max(self.p2.x), self.p1.y.max(self.p2.y)),
            p2: Point::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y)),
        }
    }

    /// Boundary included.
    pub fn contains_point(&self, point: &Point) -> bool {
        let n = self.normalized();
        point.x >= n.p2.x && point.x <= n.p1.x && point.y >= n.p2.y && point.y <= n.p1.y
    }

    pub fn decode(literal: &str) -> Result<Self> {
        let mut body = literal.trim();
        // `((x1,y1),(x2,y2))` is accepted too
        if let Some(inner) = body
            .strip_prefix("((")
            .and_then(|s| s.strip_suffix("))"))
        {
            body = inner;
        } else {
            body = body
                .strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .ok_or_else(|| ParseError::literal(Self::KIND, literal, "expected (x1,y1),(x2,y2)"))?;
        }
        let (first, second) = body
            .split_once(POINT_SEPARATOR)
            .ok_or_else(|| ParseError::literal(Self::KIND, literal, "expected two corners"))?;
        Ok(Self::new(
            parse_coords(Self::KIND, literal, first)?,
            parse_coords(Self::KIND, literal, second)?,
        ))
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.p1 == b.p1 && a.p2 == b.p2
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.p1, self.p2)
    }
}

impl FromStr for Rect {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Rect {
    const KIND: &'static str = "box";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Rect {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl PgType for Rect {
    const PG_TYPE: &'static str = "box";
    const ARRAY_TYPE: &'static str = "box[]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_order_does_not_matter() {
        let a = Rect::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Rect::new(Point::new(1.0, 1.0), Point::new(0.0, 0.0));
        assert_eq!(a, b);
        // other diagonal
        let c = Rect::new(Point::new(0.0, 1.0), Point::new(1.0, 0.0));
        assert_eq!(a, c);
    }

    #[test]
    fn parse_and_print() {
        let rect = Rect::decode("(1,1),(0,0)").unwrap();
        assert_eq!(rect.encode(), "(1,1),(0,0)");
        assert_eq!(Rect::decode("((0,0),(1,1))").unwrap(), rect);
        assert!(Rect::decode("(1,1)").is_err());
        assert!(Rect::decode("1,1,0,0").is_err());
    }

    #[test]
    fn containment() {
        let rect = Rect::new(Point::new(2.0, 2.0), Point::new(0.0, 0.0));
        assert!(rect.contains_point(&Point::new(1.0, 2.0)));
        assert!(!rect.contains_point(&Point::new(3.0, 1.0)));
    }
}
