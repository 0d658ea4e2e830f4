//! Euclidean lines: sloped (`y = m (x - x0) + y0`) or vertical (`x = x0`).
//!
//! Two lines are the same line when slope and y-intercept (or the x value of a
//! vertical line) agree; the stored anchor point is only a representative.

use super::types::{GeomError, Point};

#[derive(Clone, Copy, Debug)]
pub enum Line {
    Sloped { point: Point, slope: f64 },
    Vertical { x: f64 },
}

impl Line {
    #[inline]
    pub fn new(point: Point, slope: f64) -> Self {
        Line::Sloped { point, slope }
    }

    #[inline]
    pub fn vertical_at(point: Point) -> Self {
        Line::Vertical { x: point.x }
    }

    /// Line through two distinct points; vertical when `|Δx| < eps`.
    pub fn through(p1: Point, p2: Point, eps: f64) -> Result<Self, GeomError> {
        let d = p2 - p1;
        if d.norm() < eps {
            return Err(GeomError::CoincidentPoints { point: p1 });
        }
        if d.x.abs() < eps {
            return Ok(Line::vertical_at(p1));
        }
        Ok(Line::new(p1, d.y / d.x))
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            Line::Sloped { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }

    /// `y` at the given `x`; `None` for vertical lines.
    #[inline]
    pub fn y_value(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Sloped { point, slope } => Some(slope * (x - point.x) + point.y),
            Line::Vertical { .. } => None,
        }
    }

    #[inline]
    pub fn y_intercept(&self) -> Option<f64> {
        self.y_value(0.0)
    }

    /// Some point on the line and a (non-normalized) direction vector.
    #[inline]
    fn anchor_and_direction(&self) -> (Point, Point) {
        match *self {
            Line::Sloped { point, slope } => (point, Point::new(1.0, slope)),
            Line::Vertical { x } => (Point::new(x, 0.0), Point::new(0.0, 1.0)),
        }
    }

    /// Same line up to `eps` on slope and intercept (x value for verticals).
    pub fn is_close_to(&self, other: &Line, eps: f64) -> bool {
        match (*self, *other) {
            (Line::Vertical { x: a }, Line::Vertical { x: b }) => (a - b).abs() < eps,
            (Line::Sloped { slope: m1, .. }, Line::Sloped { slope: m2, .. }) => {
                let (Some(b1), Some(b2)) = (self.y_intercept(), other.y_intercept()) else {
                    return false;
                };
                (m1 - m2).abs() < eps && (b1 - b2).abs() < eps
            }
            _ => false,
        }
    }

    /// Intersection point; `ParallelLines` for equal slopes (this includes a line with itself).
    pub fn intersect_with(&self, other: &Line, eps: f64) -> Result<Point, GeomError> {
        match (*self, *other) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => Err(GeomError::ParallelLines),
            (Line::Vertical { x }, sloped @ Line::Sloped { .. })
            | (sloped @ Line::Sloped { .. }, Line::Vertical { x }) => {
                let y = sloped.y_value(x).ok_or(GeomError::ParallelLines)?;
                Ok(Point::new(x, y))
            }
            (Line::Sloped { point: p1, slope: m1 }, Line::Sloped { point: p2, slope: m2 }) => {
                if (m1 - m2).abs() < eps {
                    return Err(GeomError::ParallelLines);
                }
                // m1 (x - x1) + y1 = m2 (x - x2) + y2
                let x = (m1 * p1.x - m2 * p2.x + p2.y - p1.y) / (m1 - m2);
                Ok(Point::new(x, m1 * (x - p1.x) + p1.y))
            }
        }
    }

    /// Euclidean reflection of `point` across this line.
    pub fn reflect(&self, point: Point) -> Point {
        let (a, d) = self.anchor_and_direction();
        let v = point - a;
        let foot = a + d * (v.dot(&d) / d.norm_squared());
        foot * 2.0 - point
    }
}
