//! Tessellation engine: center polygon, reflection closure, render segments.
//!
//! Purpose
//! - Validate {p,q} (`TessellationConfig`), build the regular p-gon centered at
//!   the origin, and enumerate the tiling by reflecting polygons across their
//!   edges until they fall below a bounding-box area cutoff.
//! - Turn polygons into drawable edge segments (`render`), leaving markup to callers.
//!
//! Notes
//! - The closure uses an explicit work list (no recursion depth limits), LIFO
//!   by default and FIFO on request (`Traversal`).
//! - Deduplication matches vertex sets without sorting, within
//!   `TessellateCfg::match_eps` (`DEFAULT_MATCH_EPS`), not `GeomCfg::eps_dist`:
//!   copies of one polygon drift further apart than the construction tolerance.
//!   `VertexMatching::Sorted` misses copies whose vertices tie in x up to
//!   rounding and can keep the closure from terminating.
//!
//! Code cross-refs: `hyperbolic::{PoincareDisk, DiskLine, fundamental_triangle}`

mod config;
mod engine;
mod polygon;
pub mod render;

pub use config::{is_hyperbolic, ConfigError, TessellationConfig};
pub use engine::{
    compute_center_polygon, tessellate, tessellate_with, HyperbolicTessellation, TessellateCfg,
    TessellationError, Traversal, DEFAULT_MATCH_EPS, DEFAULT_MIN_AREA,
};
pub use polygon::{Polygon, PolygonSet, VertexMatching};
pub use render::{polygon_segments, EdgeSegment, RenderedCoords};

#[cfg(test)]
mod tests;
