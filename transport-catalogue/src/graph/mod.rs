//! Directed weighted graphs and shortest paths over them.
//!
//! Nothing here knows about stops or buses: vertices and edges are plain
//! indices, and weights are non-negative `f64`. The transit-specific
//! meaning of an edge lives in [`crate::routing`].

mod directed_graph;
mod error;
mod router;

pub use directed_graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use error::GraphError;
pub use router::{RouteInfo, Router};
