//! Routing error types.

use crate::graph::GraphError;

/// Errors from building the routing graph or answering a route query.
///
/// `StopNotFound` and `Unreachable` are ordinary query outcomes, reported
/// to clients the same way; the others indicate bad settings or a
/// catalogue that changed since the graph was built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    /// Routing settings can't be turned into travel times
    #[error("invalid routing settings: {0}")]
    InvalidSettings(&'static str),

    /// Graph construction failed
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),

    /// Endpoint stop is not in the catalogue or not in the graph
    #[error("stop not found: {0}")]
    StopNotFound(String),

    /// Both stops exist but no sequence of rides connects them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}
