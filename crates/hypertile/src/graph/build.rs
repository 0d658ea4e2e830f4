//! Layer-by-layer construction of the tessellation graph.

use std::collections::VecDeque;

use crate::tessellation::TessellationConfig;

use super::types::{ConnectionType, Edge, EdgeId, GraphError, Vertex, VertexId};

/// Edge-adjacency graph of the polygons of a {p,q} tiling, organized in
/// concentric layers around the center polygon.
///
/// Each layer is stored in counterclockwise order, and the first vertex of a
/// layer is adjacent to the first edge-connected vertex of the next one.
#[derive(Clone, Debug)]
pub struct TessellationGraph {
    config: TessellationConfig,
    layers: Vec<Vec<Vertex>>,
    edges: Vec<Edge>,
}

impl TessellationGraph {
    /// Build layers `0..num_layers`.
    pub fn new(config: TessellationConfig, num_layers: usize) -> Result<Self, GraphError> {
        if num_layers == 0 {
            return Err(GraphError::NoLayers);
        }
        let mut graph = Self {
            config,
            layers: vec![vec![Vertex::new(VertexId::new(0, 0))]],
            edges: Vec::new(),
        };
        for layer in 1..num_layers {
            let size = graph.layer_size(layer)?;
            graph
                .layers
                .push((0..size).map(|i| Vertex::new(VertexId::new(layer, i))).collect());
            graph.connect_layer(layer - 1)?;
            tracing::debug!(%config, layer, size, edges = graph.edges.len(), "layer connected");
        }
        let last = graph.layers.len() - 1;
        for index in 0..graph.layers[last].len() {
            graph.add_cyclic_edge(VertexId::new(last, index));
        }
        Ok(graph)
    }

    #[inline]
    pub fn config(&self) -> TessellationConfig {
        self.config
    }

    #[inline]
    pub fn layers(&self) -> &[Vec<Vertex>] {
        &self.layers
    }

    #[inline]
    pub fn layer(&self, layer: usize) -> Option<&[Vertex]> {
        self.layers.get(layer).map(Vec::as_slice)
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    /// All vertices, layer by layer.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.layers.iter().flatten()
    }

    pub fn num_vertices(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn vertex_at(&self, layer: usize, index: usize) -> Option<&Vertex> {
        self.layers.get(layer)?.get(index)
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_at(id.layer, id.index)
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Linear scan of `a`'s edges; `false` when `a` is not in the graph.
    pub fn is_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a)
            .is_some_and(|v| v.edges.iter().any(|&e| self.edges[e.0].contains(b)))
    }

    /// Neighbors of `id` in its counterclockwise edge order.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(move |v| v.edges.iter().filter_map(move |&e| self.edges[e.0].other(id)))
    }

    /// Degree of `id`, or 0 when it is not in the graph.
    #[inline]
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, Vertex::degree)
    }

    /// Layer 1 has p(q-2) polygons. Past that, each polygon of the previous
    /// layer contributes (p-3)(q-2)-1 children when it shares an edge with its
    /// own parent layer and (p-2)(q-2)-1 otherwise.
    fn layer_size(&self, layer: usize) -> Result<usize, GraphError> {
        let p = self.config.p() as i64;
        let q = self.config.q() as i64;
        let total = if layer == 1 {
            p * (q - 2)
        } else {
            self.layers[layer - 1]
                .iter()
                .map(|v| match v.previous_layer_connection {
                    Some(ConnectionType::Edge) => (p - 3) * (q - 2) - 1,
                    Some(ConnectionType::Vertex) | None => (p - 2) * (q - 2) - 1,
                })
                .sum()
        };
        usize::try_from(total).map_err(|_| GraphError::NegativeLayerSize { layer })
    }

    /// Join layer `this + 1` to layer `this` and close the cycle of `this`.
    ///
    /// Around each vertex of `this`, edges end up in the order: parent edge
    /// (from the previous pass), previous vertex in the layer, children in
    /// layer order, next vertex in the layer.
    fn connect_layer(&mut self, this: usize) -> Result<(), GraphError> {
        let p = self.config.p();
        let q = self.config.q() as i64;
        let next = this + 1;
        let mut this_queue: VecDeque<usize> = (0..self.layers[this].len()).collect();
        let mut next_queue: VecDeque<usize> = (0..self.layers[next].len()).collect();

        while let Some(index) = this_queue.pop_front() {
            let id = VertexId::new(this, index);
            if this > 0 {
                self.add_cyclic_edge(id);
            }
            // The forward cyclic edge is still missing, except for the last
            // vertex of the pass, whose forward neighbor is already linked.
            let maximal_degree = if this == 0 || this_queue.is_empty() {
                p
            } else {
                p - 1
            };

            while self.degree(id) < maximal_degree {
                let child = pop_next(&mut next_queue, next)?;
                self.add_edge(id, VertexId::new(next, child));
                self.layers[next][child].previous_layer_connection = Some(ConnectionType::Edge);

                let skip = if self.degree(id) == maximal_degree {
                    let next_saturated = this_queue.len() > 1
                        && this_queue
                            .front()
                            .is_some_and(|&i| self.layers[this][i].degree() == p - 2);
                    if next_saturated {
                        q - 5
                    } else {
                        q - 4
                    }
                } else {
                    q - 3
                };
                for _ in 0..skip.max(0) {
                    let skipped = pop_next(&mut next_queue, next)?;
                    self.layers[next][skipped].previous_layer_connection =
                        Some(ConnectionType::Vertex);
                    if next_queue.is_empty() {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn push_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { ends: (a, b) });
        tracing::trace!(%a, %b, "edge added");
        id
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId) {
        let e = self.push_edge(a, b);
        self.layers[a.layer][a.index].edges.push_back(e);
        self.layers[b.layer][b.index].edges.push_back(e);
    }

    /// Edge to the cyclic predecessor in the same layer, appended on `id` and
    /// prepended on the predecessor to keep both lists counterclockwise.
    fn add_cyclic_edge(&mut self, id: VertexId) {
        let len = self.layers[id.layer].len();
        let prev = VertexId::new(id.layer, (id.index + len - 1) % len);
        if prev == id || self.is_adjacent(id, prev) {
            return;
        }
        let e = self.push_edge(id, prev);
        self.layers[id.layer][id.index].edges.push_back(e);
        self.layers[prev.layer][prev.index].edges.push_front(e);
    }
}

#[inline]
fn pop_next(queue: &mut VecDeque<usize>, layer: usize) -> Result<usize, GraphError> {
    queue
        .pop_front()
        .ok_or(GraphError::LayerExhausted { layer })
}
