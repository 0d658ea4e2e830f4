use std::cmp::Ordering;

use super::types::{Orientation, Point};

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Cross-product sign test for the turn `p → q → r`.
///
/// `Collinear` when the magnitude of the cross product is below `eps`.
pub fn orientation(p: Point, q: Point, r: Point, eps: f64) -> Orientation {
    let z = cross(p, q, r);
    if z.abs() < eps {
        Orientation::Collinear
    } else if z > 0.0 {
        Orientation::Counterclockwise
    } else {
        Orientation::Clockwise
    }
}

/// Lexicographic order on points (x, then y). NaN compares as equal.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn points_close(a: Point, b: Point, eps: f64) -> bool {
    distance(a, b) < eps
}

/// Area of the axis-aligned bounding box of `points` (0 for fewer than two points).
pub fn bounding_box_area(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut lo = points[0];
    let mut hi = points[0];
    for p in &points[1..] {
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }
    (hi.x - lo.x) * (hi.y - lo.y)
}

/// Rotate `point` about the origin by `angle` radians (counterclockwise).
///
/// In the disk model this Euclidean rotation is also a hyperbolic isometry.
pub fn rotate_around_origin(angle: f64, point: Point) -> Point {
    let (s, c) = angle.sin_cos();
    Point::new(c * point.x - s * point.y, s * point.x + c * point.y)
}
