//! Circles: inversion, tangents, line intersection, and the perpendicular-circle
//! construction that underlies hyperbolic lines in the disk model.

use nalgebra::{Matrix3, Matrix3x4};

use super::line::Line;
use super::types::{GeomCfg, GeomError, Point};
use super::util::lex_cmp;

/// Circle with `radius > 0` (enforced by `Circle::new`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, GeomError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeomError::NonPositiveRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Unit circle centered at the origin.
    #[inline]
    pub fn unit() -> Self {
        Self {
            center: Point::zeros(),
            radius: 1.0,
        }
    }

    /// Whether `point` lies on the circle (within `eps`).
    #[inline]
    pub fn contains(&self, point: Point, eps: f64) -> bool {
        ((point - self.center).norm() - self.radius).abs() < eps
    }

    /// Inverse of `point`: the point on the ray from the center through `point`
    /// whose distance `d'` satisfies `d · d' = r²`.
    ///
    /// Pre: `point != center` (the result is non-finite otherwise).
    pub fn invert_point(&self, point: Point) -> Point {
        let v = point - self.center;
        let square_norm = v.norm_squared();
        debug_assert!(square_norm > 0.0, "cannot invert the center of a circle");
        self.center + v * (self.radius * self.radius / square_norm)
    }

    /// Tangent line at a point on the circle.
    pub fn tangent_at(&self, point: Point, eps: f64) -> Result<Line, GeomError> {
        if !self.contains(point, eps) {
            return Err(GeomError::PointNotOnCircle {
                point,
                distance: (point - self.center).norm(),
                radius: self.radius,
            });
        }
        let dy = point.y - self.center.y;
        if dy.abs() < eps {
            return Ok(Line::vertical_at(point));
        }
        Ok(Line::new(point, -(point.x - self.center.x) / dy))
    }

    /// Intersections with a line: empty, one point (tangent), or two points sorted
    /// lexicographically.
    pub fn intersect_with_line(&self, line: &Line, eps: f64) -> Vec<Point> {
        let (c, r) = (self.center, self.radius);
        let mut out = match *line {
            Line::Vertical { x } => {
                let disc = r * r - (x - c.x) * (x - c.x);
                roots(disc, eps)
                    .into_iter()
                    .map(|s| Point::new(x, c.y + s))
                    .collect::<Vec<_>>()
            }
            Line::Sloped { point, slope } => {
                // Substitute y = m x + b into (x-cx)² + (y-cy)² = r².
                let b = point.y - slope * point.x;
                let a2 = 1.0 + slope * slope;
                let a1 = slope * (b - c.y) - c.x;
                let a0 = c.x * c.x + (b - c.y) * (b - c.y) - r * r;
                let disc = a1 * a1 - a2 * a0;
                roots(disc, eps)
                    .into_iter()
                    .map(|s| {
                        let x = (-a1 + s) / a2;
                        Point::new(x, slope * x + b)
                    })
                    .collect::<Vec<_>>()
            }
        };
        out.sort_by(lex_cmp);
        out
    }
}

/// `±sqrt(disc)` with a single root for a (near-)zero discriminant.
fn roots(disc: f64, eps: f64) -> Vec<f64> {
    if disc < -eps {
        Vec::new()
    } else if disc.abs() <= eps {
        vec![0.0]
    } else {
        let s = disc.sqrt();
        vec![-s, s]
    }
}

/// Circle through `p1`, `p2` that meets `circle` at right angles.
///
/// Any circle through a point and its inverse is perpendicular to the
/// reference circle, so this is the circumcircle of `p1`, `p2`, `invert(p1)`.
/// The circumcircle comes from the 3×3 minors of the rows `[|p|², x, y, 1]`.
///
/// Errors with `DegenerateConfiguration` when `p1`, `p2` and the circle's
/// center are collinear; the hyperbolic line is then a diameter and callers
/// must take that branch (see `PoincareDisk::line_through`).
pub fn circle_through_points_perpendicular_to_circle(
    p1: Point,
    p2: Point,
    circle: &Circle,
    cfg: GeomCfg,
) -> Result<Circle, GeomError> {
    let p3 = circle.invert_point(p1);
    let row = |p: Point| [p.norm_squared(), p.x, p.y, 1.0];
    let (r1, r2, r3) = (row(p1), row(p2), row(p3));
    let m = Matrix3x4::new(
        r1[0], r1[1], r1[2], r1[3], //
        r2[0], r2[1], r2[2], r2[3], //
        r3[0], r3[1], r3[2], r3[3],
    );
    let minor = |skip: usize| -> f64 {
        let cols: Vec<usize> = (0..4).filter(|&j| j != skip).collect();
        Matrix3::from_fn(|i, j| m[(i, cols[j])]).determinant()
    };

    let det_11 = minor(0);
    if !det_11.is_finite() || det_11.abs() < cfg.eps_det {
        return Err(GeomError::DegenerateConfiguration {
            p1,
            p2,
            center: circle.center,
        });
    }
    let det_12 = minor(1);
    let det_13 = minor(2);
    let det_14 = minor(3);

    let center = Point::new(0.5 * det_12 / det_11, -0.5 * det_13 / det_11);
    let radius = (center.norm_squared() + det_14 / det_11).sqrt();
    Circle::new(center, radius)
}
