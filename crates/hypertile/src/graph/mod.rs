//! Combinatorial tessellation graph: polygons as vertices, shared sides as edges.
//!
//! Purpose
//! - Build the adjacency structure of a {p,q} tiling layer by layer without
//!   any coordinates, using only p and q.
//!
//! Notes
//! - Arena layout: `Vertex` holds `EdgeId`s, `TessellationGraph` owns the
//!   `Edge` records. No reference cycles.
//! - Every vertex's edge list is kept in counterclockwise order, so renderers
//!   can walk polygons around a vertex without geometry.
//! - For q = 3 the size formula undercounts and the builder reports
//!   `GraphError::LayerExhausted` from layer 2 on.
//!
//! Code cross-refs: `tessellation::TessellationConfig`.

mod build;
mod types;

pub use build::TessellationGraph;
pub use types::{ConnectionType, Edge, EdgeId, GraphError, Vertex, VertexId};
