//! Regular {p,q} tessellations of the Poincaré disk.
//!
//! Layers, bottom up:
//! - `geom2`: Euclidean points, lines, circles and the perpendicular-circle construction.
//! - `hyperbolic`: disk model, hyperbolic lines with reflection, fundamental triangle.
//! - `tessellation`: {p,q} validation, center polygon, reflection closure, render segments.
//! - `graph`: coordinate-free layered adjacency graph of the tiling.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI and benches; breaking changes
//!   are fine when they improve the design.
//! - Library code never installs a `tracing` subscriber; callers decide.

pub mod api;
pub mod geom2;
pub mod graph;
pub mod hyperbolic;
pub mod tessellation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{Circle, GeomCfg, Line, Orientation, Point};
    pub use crate::graph::{ConnectionType, TessellationGraph, VertexId};
    pub use crate::hyperbolic::{DiskLine, PoincareDisk};
    pub use crate::tessellation::{
        HyperbolicTessellation, Polygon, TessellateCfg, TessellationConfig, Traversal,
        VertexMatching,
    };
    pub use nalgebra::Vector2 as Vec2;
}
