//! Directed weighted graph with adjacency lists.

use std::fmt;

use super::GraphError;

/// Index of a vertex, in `0..vertex_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of an edge, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// A directed graph over a fixed vertex set with non-negative edge weights.
///
/// Parallel edges and self-loops are allowed and stay distinct. Edge ids
/// are assigned sequentially, so inserting the same edges in the same order
/// always yields the same ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either endpoint is out of range or the weight is
    /// negative or NaN.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, GraphError> {
        for vertex in [edge.from, edge.to] {
            if vertex.0 >= self.vertex_count() {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count(),
                });
            }
        }
        if edge.weight.is_nan() || edge.weight < 0.0 {
            return Err(GraphError::InvalidWeight(edge.weight));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        self.incidence[edge.from.0].push(id);
        Ok(id)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Returns all edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the ids of the edges leaving a vertex.
    ///
    /// Empty for a vertex outside the graph.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
