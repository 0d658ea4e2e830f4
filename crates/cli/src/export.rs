//! JSON shape of the tessellation graph.

use hypertile::api::{ConnectionType, TessellationGraph, VertexId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GraphDoc {
    pub p: usize,
    pub q: usize,
    pub layer_sizes: Vec<usize>,
    pub vertices: Vec<VertexDoc>,
    /// Endpoint pairs, in insertion order.
    pub edges: Vec<[VertexRef; 2]>,
}

#[derive(Debug, Serialize)]
pub struct VertexDoc {
    pub layer: usize,
    pub index: usize,
    /// `"edge"`, `"vertex"`, or null.
    pub previous_layer_connection: Option<&'static str>,
    /// Neighbors in counterclockwise order.
    pub neighbors: Vec<VertexRef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VertexRef(pub usize, pub usize);

impl From<VertexId> for VertexRef {
    fn from(id: VertexId) -> Self {
        VertexRef(id.layer, id.index)
    }
}

impl GraphDoc {
    pub fn from_graph(graph: &TessellationGraph) -> Self {
        let config = graph.config();
        let vertices = graph
            .vertices()
            .map(|v| VertexDoc {
                layer: v.id().layer,
                index: v.id().index,
                previous_layer_connection: v.previous_layer_connection().map(|c| match c {
                    ConnectionType::Edge => "edge",
                    ConnectionType::Vertex => "vertex",
                }),
                neighbors: graph.neighbors(v.id()).map(VertexRef::from).collect(),
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|e| [e.ends.0.into(), e.ends.1.into()])
            .collect();
        Self {
            p: config.p(),
            q: config.q(),
            layer_sizes: graph.layer_sizes(),
            vertices,
            edges,
        }
    }
}
