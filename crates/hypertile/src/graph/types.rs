//! Arena types for the tessellation graph.
//!
//! Vertices are addressed by `(layer, index)` and own only `EdgeId`s; the
//! edge records live in one `Vec` on the graph.

use std::collections::VecDeque;
use std::fmt;

/// Position of a vertex: its layer and its index in that layer's cyclic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub layer: usize,
    pub index: usize,
}

impl VertexId {
    #[inline]
    pub const fn new(layer: usize, index: usize) -> Self {
        Self { layer, index }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v_{},{}", self.layer, self.index)
    }
}

/// Index into `TessellationGraph::edges()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// How a polygon meets the previous layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    /// Shares a polygon edge with a previous-layer polygon (graph edge present).
    Edge,
    /// Touches the previous layer only at a polygon vertex (no graph edge).
    Vertex,
}

/// One polygon of the tiling.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) previous_layer_connection: Option<ConnectionType>,
    // Counterclockwise around the polygon.
    pub(crate) edges: VecDeque<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            previous_layer_connection: None,
            edges: VecDeque::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Incident edges in counterclockwise order.
    #[inline]
    pub fn edges(&self) -> &VecDeque<EdgeId> {
        &self.edges
    }

    /// `None` for the center vertex, and for any vertex the connecting pass
    /// never popped. That includes the last vertex of layer 1: the center
    /// saturates at degree p on its p-th child, the closing skip is q - 4
    /// (one short of the regular q - 3), and the pass ends before reaching it.
    #[inline]
    pub fn previous_layer_connection(&self) -> Option<ConnectionType> {
        self.previous_layer_connection
    }
}

/// Undirected edge between two polygons sharing a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub ends: (VertexId, VertexId),
}

impl Edge {
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.ends.0 == v || self.ends.1 == v
    }

    /// The endpoint that is not `v`, or `None` when `v` is not on this edge.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.ends.0 == v {
            Some(self.ends.1)
        } else if self.ends.1 == v {
            Some(self.ends.0)
        } else {
            None
        }
    }
}

/// Errors raised while building a tessellation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// At least the center layer is required.
    NoLayers,
    /// Connecting into `layer` needed more vertices than the size formula produced.
    LayerExhausted { layer: usize },
    /// The size formula summed to a negative count for `layer`.
    NegativeLayerSize { layer: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NoLayers => write!(f, "a tessellation graph needs at least one layer"),
            GraphError::LayerExhausted { layer } => {
                write!(f, "ran out of vertices while connecting layer {layer}")
            }
            GraphError::NegativeLayerSize { layer } => {
                write!(f, "layer {layer} has a negative computed size")
            }
        }
    }
}

impl std::error::Error for GraphError {}
