//! Fixed-shape geometric types: `point`, `box`, `path`, `polygon`, `circle`.
//!
//! Coordinates are `f64`. Each type parses and prints the PostgreSQL text
//! form; point lists are written `(x1,y1),(x2,y2),...`.

mod circle;
#[cfg(feature = "geo-types")]
mod geo;
mod path;
mod point;
mod polygon;
mod rect;

pub use circle::Circle;
pub use path::Path;
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;

use crate::error::{ParseError, Result};
use crate::scalar::FromLiteral;

const POINT_SEPARATOR: &str = "),(";

/// Parses `x,y` with the parentheses already removed.
fn parse_coords(kind: &'static str, literal: &str, body: &str) -> Result<Point> {
    let (x, y) = body
        .split_once(',')
        .ok_or_else(|| ParseError::literal(kind, literal, "expected x,y"))?;
    Ok(Point::new(parse_coord(kind, x)?, parse_coord(kind, y)?))
}

fn parse_coord(kind: &'static str, token: &str) -> Result<f64> {
    f64::from_literal(token).map_err(|e| match e {
        ParseError::Token { token, detail, .. } => ParseError::Token {
            kind,
            token,
            detail,
        },
        other => other,
    })
}

/// Parses `(x1,y1),(x2,y2),...`. Blank input is an empty list.
fn parse_point_list(kind: &'static str, literal: &str, body: &str) -> Result<Vec<Point>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let inner = body
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| ParseError::literal(kind, literal, "expected (x,y) points"))?;
    inner
        .split(POINT_SEPARATOR)
        .map(|coords| parse_coords(kind, literal, coords))
        .collect()
}

fn write_point_list(out: &mut String, points: &[Point]) {
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&point.to_string());
    }
}
