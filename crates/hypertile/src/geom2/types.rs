//! Basic planar types and tolerances shared by the geometry modules.
//!
//! - `GeomCfg`: centralizes epsilons for determinant/collinearity and distance checks.
//! - `Point`: plain `nalgebra::Vector2<f64>` value type.
//! - `Orientation`: result of the cross-product sign test.
//! - `GeomError`: construction failures of lines and circles.
//!
//! Code cross-refs: `util::orientation`, `line::Line`, `circle::Circle`

use std::fmt;

use nalgebra::Vector2;

/// A point (or vector) in the Euclidean plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// Every near-equality and collinearity decision takes its threshold from here,
/// so callers and tests can tighten or loosen them per run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Threshold on cross products and 3×3 minors below which points count as collinear.
    pub eps_det: f64,
    /// Threshold on Euclidean distances (point closeness, on-circle tests).
    pub eps_dist: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-8,
            eps_dist: 1e-8,
        }
    }
}

impl GeomCfg {
    /// Same threshold for both checks.
    #[inline]
    pub fn uniform(eps: f64) -> Self {
        Self {
            eps_det: eps,
            eps_dist: eps,
        }
    }
}

/// Turn direction of the triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
    Collinear,
}

/// Errors surfaced by planar constructions.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A circle needs a strictly positive, finite radius.
    NonPositiveRadius { radius: f64 },
    /// Two points that should span a line coincide.
    CoincidentPoints { point: Point },
    /// The lines never meet (equal slopes, or the same line).
    ParallelLines,
    /// A tangent was requested at a point that is not on the circle.
    PointNotOnCircle { point: Point, distance: f64, radius: f64 },
    /// The two points and the reference center are collinear; the
    /// hyperbolic line through them is a diameter, not an arc.
    DegenerateConfiguration { p1: Point, p2: Point, center: Point },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::NonPositiveRadius { radius } => {
                write!(f, "circle radius must be positive and finite (got {radius})")
            }
            GeomError::CoincidentPoints { point } => write!(
                f,
                "cannot build a line through two coincident points ({}, {})",
                point.x, point.y
            ),
            GeomError::ParallelLines => write!(f, "lines are parallel and do not intersect"),
            GeomError::PointNotOnCircle {
                point,
                distance,
                radius,
            } => write!(
                f,
                "point ({}, {}) is not on the circle (distance {distance} from center, radius {radius})",
                point.x, point.y
            ),
            GeomError::DegenerateConfiguration { p1, p2, center } => write!(
                f,
                "input points ({}, {}) and ({}, {}) lie on a line with the circle center ({}, {})",
                p1.x, p1.y, p2.x, p2.y, center.x, center.y
            ),
        }
    }
}

impl std::error::Error for GeomError {}
