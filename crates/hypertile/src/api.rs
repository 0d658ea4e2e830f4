//! Curated surface for the CLI and benches (UNSTABLE).
//!
//! Flat re-exports so callers do not need to know the module layout. Breaking
//! changes follow the modules they come from.

// Planar geometry
pub use crate::geom2::{
    circle_through_points_perpendicular_to_circle, orientation, Circle, GeomCfg, GeomError, Line,
    Orientation, Point,
};
// Disk model
pub use crate::hyperbolic::{fundamental_triangle, DiskLine, PoincareDisk};
// Tiling
pub use crate::tessellation::{
    compute_center_polygon, polygon_segments, tessellate, tessellate_with, ConfigError,
    EdgeSegment, HyperbolicTessellation, Polygon, RenderedCoords, TessellateCfg,
    TessellationConfig, TessellationError, Traversal, VertexMatching, DEFAULT_MATCH_EPS,
    DEFAULT_MIN_AREA,
};
// Adjacency graph
pub use crate::graph::{
    ConnectionType, Edge, EdgeId, GraphError, TessellationGraph, Vertex, VertexId,
};
