//! Center polygon construction and reflection closure.

use std::collections::VecDeque;
use std::fmt;

use crate::geom2::{Circle, GeomCfg, GeomError};
use crate::hyperbolic::{fundamental_triangle, PoincareDisk};

use super::config::TessellationConfig;
use super::polygon::{Polygon, PolygonSet, VertexMatching};

/// Default resolution cutoff (Euclidean bounding-box area).
pub const DEFAULT_MIN_AREA: f64 = 1e-3;

/// Default vertex tolerance for recognizing an already-processed polygon.
///
/// Copies of one polygon reached along different reflection paths drift
/// apart by up to ~1e-7 at `DEFAULT_MIN_AREA` (sides close to a diameter
/// invert in circles of very large radius). Distinct polygons above the
/// cutoff are separated by far more than this.
pub const DEFAULT_MATCH_EPS: f64 = 1e-5;

/// Order in which the closure work list is drained.
///
/// Only the emission order depends on it; the emitted set does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// LIFO: the most recently pushed reflection is expanded next.
    #[default]
    DepthFirst,
    /// FIFO: polygons are expanded in discovery order.
    BreadthFirst,
}

/// Reflection-closure configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessellateCfg {
    /// Polygons whose bounding box is smaller than this are not emitted or expanded.
    pub min_area: f64,
    /// Near-equality used to detect already-processed polygons.
    pub matching: VertexMatching,
    /// Per-vertex tolerance for `matching`.
    pub match_eps: f64,
    pub traversal: Traversal,
}

impl Default for TessellateCfg {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            matching: VertexMatching::default(),
            match_eps: DEFAULT_MATCH_EPS,
            traversal: Traversal::default(),
        }
    }
}

impl TessellateCfg {
    #[inline]
    pub fn with_min_area(min_area: f64) -> Self {
        Self {
            min_area,
            ..Self::default()
        }
    }
}

/// Errors surfaced by the tessellation engine.
#[derive(Clone, Debug, PartialEq)]
pub enum TessellationError {
    /// The resolution cutoff must be strictly positive, or the closure never ends.
    NonPositiveMinArea { min_area: f64 },
    /// The dedup tolerance must be finite and non-negative.
    InvalidMatchEps { match_eps: f64 },
    /// A hyperbolic line could not be constructed (indicates a degenerate polygon).
    Geometry(GeomError),
}

impl fmt::Display for TessellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessellationError::NonPositiveMinArea { min_area } => {
                write!(f, "min_area must be strictly positive (got {min_area})")
            }
            TessellationError::InvalidMatchEps { match_eps } => {
                write!(f, "match_eps must be finite and non-negative (got {match_eps})")
            }
            TessellationError::Geometry(err) => write!(f, "geometry failure: {err}"),
        }
    }
}

impl std::error::Error for TessellationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TessellationError::Geometry(err) => Some(err),
            TessellationError::NonPositiveMinArea { .. }
            | TessellationError::InvalidMatchEps { .. } => None,
        }
    }
}

impl From<GeomError> for TessellationError {
    fn from(err: GeomError) -> Self {
        TessellationError::Geometry(err)
    }
}

/// The regular p-gon centered at the disk center.
///
/// Starts from the fundamental triangle's top vertex B and x-axis vertex D and
/// alternately reflects each across the diameter through the other; every
/// round advances B by one vertex (angle 2π/p), so p-1 rounds close the polygon.
pub fn compute_center_polygon(
    config: &TessellationConfig,
    disk: &PoincareDisk,
) -> Result<Polygon, GeomError> {
    let [center, top_vertex, x_axis_vertex] = fundamental_triangle(config);
    let p = config.p();
    let mut vertices = Vec::with_capacity(p);
    vertices.push(top_vertex);

    let (mut p1, mut p2) = (top_vertex, x_axis_vertex);
    for _ in 0..p - 1 {
        p2 = disk.line_through(center, p1)?.reflect(p2);
        p1 = disk.line_through(center, p2)?.reflect(p1);
        vertices.push(p1);
    }
    Ok(Polygon::new(vertices))
}

/// All polygons reachable from `center_polygon` by edge reflections, down to
/// polygons whose bounding box is smaller than `min_area`.
///
/// Work list is LIFO. A popped polygon below the cutoff is recorded as
/// processed and dropped; a near-duplicate of a processed polygon is dropped;
/// anything else is emitted, recorded, and its reflection across every edge is
/// pushed. The emitted set does not depend on traversal order; only the output
/// order does.
pub fn tessellate(
    center_polygon: &Polygon,
    disk: &PoincareDisk,
    min_area: f64,
) -> Result<Vec<Polygon>, TessellationError> {
    tessellate_with(center_polygon, disk, TessellateCfg::with_min_area(min_area))
}

/// `tessellate` with explicit matching, tolerance and traversal order.
pub fn tessellate_with(
    center_polygon: &Polygon,
    disk: &PoincareDisk,
    run: TessellateCfg,
) -> Result<Vec<Polygon>, TessellationError> {
    let TessellateCfg {
        min_area,
        matching,
        match_eps,
        traversal,
    } = run;
    if min_area.is_nan() || min_area <= 0.0 {
        return Err(TessellationError::NonPositiveMinArea { min_area });
    }
    if !match_eps.is_finite() || match_eps < 0.0 {
        return Err(TessellationError::InvalidMatchEps { match_eps });
    }
    let mut pending = VecDeque::from([center_polygon.clone()]);
    let mut processed = PolygonSet::new(matching);
    let mut tessellated = Vec::new();

    let next = |pending: &mut VecDeque<Polygon>| match traversal {
        Traversal::DepthFirst => pending.pop_back(),
        Traversal::BreadthFirst => pending.pop_front(),
    };
    while let Some(polygon) = next(&mut pending) {
        if polygon.bounding_box_area() < min_area {
            processed.add_polygon(&polygon);
            continue;
        }
        if processed.contains_polygon(&polygon, match_eps) {
            continue;
        }
        for (u, v) in polygon.edges() {
            let line = disk.line_through(u, v)?;
            pending.push_back(polygon.reflected(&line));
        }
        processed.add_polygon(&polygon);
        tracing::trace!(
            emitted = tessellated.len() + 1,
            pending = pending.len(),
            "polygon emitted"
        );
        tessellated.push(polygon);
    }
    tracing::debug!(
        polygons = tessellated.len(),
        processed = processed.len(),
        min_area,
        ?matching,
        ?traversal,
        "reflection closure finished"
    );
    Ok(tessellated)
}

/// A {p,q} tiling of a Poincaré disk up to a resolution cutoff.
#[derive(Clone, Debug)]
pub struct HyperbolicTessellation {
    pub config: TessellationConfig,
    pub disk: PoincareDisk,
    pub center_polygon: Polygon,
    pub polygons: Vec<Polygon>,
}

impl HyperbolicTessellation {
    /// Tile the unit disk with default tolerances.
    pub fn new(config: TessellationConfig, min_area: f64) -> Result<Self, TessellationError> {
        Self::with_cfg(config, GeomCfg::default(), TessellateCfg::with_min_area(min_area))
    }

    /// Tile the unit disk with explicit tolerances and closure settings.
    pub fn with_cfg(
        config: TessellationConfig,
        cfg: GeomCfg,
        run: TessellateCfg,
    ) -> Result<Self, TessellationError> {
        let disk = PoincareDisk::new(Circle::unit(), cfg);
        let center_polygon = compute_center_polygon(&config, &disk)?;
        let polygons = tessellate_with(&center_polygon, &disk, run)?;
        tracing::debug!(%config, polygons = polygons.len(), "tessellation built");
        Ok(Self {
            config,
            disk,
            center_polygon,
            polygons,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
