//! Renderer-neutral output: edge segments and the disk → canvas transform.
//!
//! Markup generation (SVG paths etc.) lives outside the core; it consumes
//! `EdgeSegment`s mapped through `RenderedCoords`.

use crate::geom2::{orientation, GeomError, Orientation, Point};
use crate::hyperbolic::{DiskLine, PoincareDisk};

use super::polygon::Polygon;

/// Disk coordinates → square canvas coordinates (y axis pointing down).
///
/// The unit disk fills the canvas: origin ↦ canvas center, radius 1 ↦ `width / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedCoords {
    pub canvas_width: f64,
    pub canvas_center: Point,
    pub scaling_factor: f64,
}

impl RenderedCoords {
    pub fn new(canvas_width: f64) -> Self {
        Self {
            canvas_width,
            canvas_center: Point::new(canvas_width / 2.0, canvas_width / 2.0),
            scaling_factor: canvas_width / 2.0,
        }
    }

    #[inline]
    pub fn point(&self, p: Point) -> Point {
        self.canvas_center + Point::new(p.x, -p.y) * self.scaling_factor
    }

    #[inline]
    pub fn length(&self, r: f64) -> f64 {
        r * self.scaling_factor
    }
}

/// One polygon edge, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeSegment {
    /// Part of a diameter.
    Straight { from: Point, to: Point },
    /// Part of a circle perpendicular to the boundary.
    ///
    /// `counterclockwise` is the orientation of `(from, to, disk center)` in
    /// disk coordinates; the y flip of `RenderedCoords` turns it into the
    /// positive sweep direction of screen-space arc commands.
    Arc {
        from: Point,
        to: Point,
        radius: f64,
        center: Point,
        counterclockwise: bool,
    },
}

impl EdgeSegment {
    /// Segment for the edge `from → to` of a polygon in `disk`.
    pub fn between(from: Point, to: Point, disk: &PoincareDisk) -> Result<Self, GeomError> {
        Ok(match disk.line_through(from, to)? {
            DiskLine::Diameter(_) => EdgeSegment::Straight { from, to },
            DiskLine::Arc(circle) => EdgeSegment::Arc {
                from,
                to,
                radius: circle.radius,
                center: circle.center,
                counterclockwise: orientation(from, to, disk.center(), disk.cfg().eps_det)
                    == Orientation::Counterclockwise,
            },
        })
    }

    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        match *self {
            EdgeSegment::Straight { from, to } | EdgeSegment::Arc { from, to, .. } => (from, to),
        }
    }

    /// Same segment in canvas coordinates.
    pub fn to_rendered(&self, coords: &RenderedCoords) -> EdgeSegment {
        match *self {
            EdgeSegment::Straight { from, to } => EdgeSegment::Straight {
                from: coords.point(from),
                to: coords.point(to),
            },
            EdgeSegment::Arc {
                from,
                to,
                radius,
                center,
                counterclockwise,
            } => EdgeSegment::Arc {
                from: coords.point(from),
                to: coords.point(to),
                radius: coords.length(radius),
                center: coords.point(center),
                counterclockwise,
            },
        }
    }
}

/// Edge segments of `polygon` in disk coordinates, in vertex order.
pub fn polygon_segments(polygon: &Polygon, disk: &PoincareDisk) -> Result<Vec<EdgeSegment>, GeomError> {
    polygon
        .edges()
        .map(|(from, to)| EdgeSegment::between(from, to, disk))
        .collect()
}
