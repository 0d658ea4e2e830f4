//! The Poincaré disk and its lines.

use crate::geom2::{
    circle_through_points_perpendicular_to_circle, orientation, Circle, GeomCfg, GeomError, Line,
    Orientation, Point,
};

/// A hyperbolic line of the disk model.
///
/// - `Diameter`: a Euclidean line through the disk center.
/// - `Arc`: a circle perpendicular to the boundary circle.
#[derive(Clone, Copy, Debug)]
pub enum DiskLine {
    Diameter(Line),
    Arc(Circle),
}

impl DiskLine {
    /// Hyperbolic reflection across this line (an isometry and an involution).
    ///
    /// Diameters reflect in the Euclidean sense; arcs invert in their circle.
    #[inline]
    pub fn reflect(&self, point: Point) -> Point {
        match self {
            DiskLine::Diameter(line) => line.reflect(point),
            DiskLine::Arc(circle) => circle.invert_point(point),
        }
    }

    #[inline]
    pub fn is_diameter(&self) -> bool {
        matches!(self, DiskLine::Diameter(_))
    }

    #[inline]
    pub fn as_arc(&self) -> Option<&Circle> {
        match self {
            DiskLine::Arc(c) => Some(c),
            DiskLine::Diameter(_) => None,
        }
    }
}

/// Poincaré disk model: the interior of `boundary`, with explicit tolerances.
#[derive(Clone, Copy, Debug)]
pub struct PoincareDisk {
    pub boundary: Circle,
    pub cfg: GeomCfg,
}

impl Default for PoincareDisk {
    fn default() -> Self {
        Self::unit()
    }
}

impl PoincareDisk {
    #[inline]
    pub fn new(boundary: Circle, cfg: GeomCfg) -> Self {
        Self { boundary, cfg }
    }

    /// Unit disk at the origin with default tolerances.
    #[inline]
    pub fn unit() -> Self {
        Self::new(Circle::unit(), GeomCfg::default())
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.boundary.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.boundary.radius
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Strictly inside the boundary circle.
    #[inline]
    pub fn contains_interior(&self, point: Point) -> bool {
        (point - self.center()).norm() < self.radius()
    }

    /// The hyperbolic line through two distinct points.
    ///
    /// A diameter when `p1`, `p2` and the center are collinear, otherwise the
    /// arc of the perpendicular circle through both points.
    ///
    /// The collinearity test and the circle construction threshold different
    /// determinants. When the orientation says "not collinear" but the
    /// construction finds the three points degenerate, the pair is treated
    /// as lying on a diameter.
    pub fn line_through(&self, p1: Point, p2: Point) -> Result<DiskLine, GeomError> {
        if orientation(p1, p2, self.center(), self.cfg.eps_det) == Orientation::Collinear {
            return self.diameter_through(p1, p2);
        }
        match circle_through_points_perpendicular_to_circle(p1, p2, &self.boundary, self.cfg) {
            Ok(circle) => Ok(DiskLine::Arc(circle)),
            Err(GeomError::DegenerateConfiguration { .. }) => {
                tracing::trace!(?p1, ?p2, "near-diameter side, using the diameter branch");
                self.diameter_through(p1, p2)
            }
            Err(e) => Err(e),
        }
    }

    #[inline]
    fn diameter_through(&self, p1: Point, p2: Point) -> Result<DiskLine, GeomError> {
        Line::through(p1, p2, self.cfg.eps_dist).map(DiskLine::Diameter)
    }

    /// Reflect `points` across the hyperbolic line through `p1` and `p2`.
    pub fn reflect_points(
        &self,
        p1: Point,
        p2: Point,
        points: &[Point],
    ) -> Result<Vec<Point>, GeomError> {
        let line = self.line_through(p1, p2)?;
        Ok(points.iter().map(|&p| line.reflect(p)).collect())
    }
}
