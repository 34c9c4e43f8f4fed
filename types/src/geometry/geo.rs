//! Conversions to and from `geo-types`.

use super::{Path, Point, Polygon, Rect};

impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.x, p.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<Rect> for geo_types::Rect<f64> {
    fn from(r: Rect) -> Self {
        geo_types::Rect::new((r.p1.x, r.p1.y), (r.p2.x, r.p2.y))
    }
}

impl From<geo_types::Rect<f64>> for Rect {
    fn from(r: geo_types::Rect<f64>) -> Self {
        let (min, max) = (r.min(), r.max());
        Rect::new(Point::new(max.x, max.y), Point::new(min.x, min.y))
    }
}

impl From<Path> for geo_types::LineString<f64> {
    fn from(path: Path) -> Self {
        let coords: Vec<(f64, f64)> = path.points.iter().map(|p| (p.x, p.y)).collect();
        let mut line = geo_types::LineString::from(coords);
        if path.closed {
            line.close();
        }
        line
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        let coords: Vec<(f64, f64)> = polygon.points.iter().map(|p| (p.x, p.y)).collect();
        geo_types::Polygon::new(geo_types::LineString::from(coords), Vec::new())
    }
}
