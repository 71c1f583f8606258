//! Graph error types.

use super::VertexId;

/// Errors from constructing a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Edge endpoint is not a vertex of the graph
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    /// Edge weight is negative or NaN
    #[error("edge weight must be a non-negative number, got {0}")]
    InvalidWeight(f64),
}
