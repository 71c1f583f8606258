//! Single-source shortest paths with path reconstruction.
//!
//! The router owns its graph and runs Dijkstra once from every vertex when
//! it is built. Each run leaves a shortest-path tree: the best known weight
//! of every reachable vertex and the last edge on the way there. A query is
//! then a walk back up one tree.
//!
//! Queries take `&self` and touch no shared mutable state, so a built router
//! can answer queries from several threads at once.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::debug;

use super::{DirectedWeightedGraph, EdgeId, VertexId};

/// A shortest path: its total weight and the edges along it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Tree entry for a reached vertex.
#[derive(Debug, Clone, Copy)]
struct Reached {
    weight: f64,
    /// `None` only for the tree's root.
    prev_edge: Option<EdgeId>,
}

/// Shortest-path tree rooted at one source vertex; `None` = unreachable.
type PathTree = Vec<Option<Reached>>;

/// Shortest-path solver over an immutable graph.
#[derive(Debug, Clone)]
pub struct Router {
    graph: DirectedWeightedGraph,
    trees: Vec<PathTree>,
}

impl Router {
    /// Take ownership of a graph and precompute shortest paths from every vertex.
    pub fn new(graph: DirectedWeightedGraph) -> Self {
        let trees = (0..graph.vertex_count())
            .map(|source| shortest_path_tree(&graph, VertexId(source)))
            .collect();

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "shortest-path trees built"
        );

        Self { graph, trees }
    }

    /// Returns the graph the router was built over.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Find a shortest path between two vertices.
    ///
    /// Returns `None` if `to` is unreachable from `from`, or if either is
    /// not a vertex of the graph. A path from a vertex to itself has weight
    /// zero and no edges. When several shortest paths tie, any one of them
    /// may be returned.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo> {
        let tree = self.trees.get(from.0)?;
        let target = (*tree.get(to.0)?)?;

        let mut edges = Vec::new();
        let mut prev_edge = target.prev_edge;
        while let Some(edge_id) = prev_edge {
            edges.push(edge_id);
            let edge = self.graph.edge(edge_id)?;
            prev_edge = tree[edge.from.0].and_then(|reached| reached.prev_edge);
        }
        edges.reverse();

        Some(RouteInfo {
            weight: target.weight,
            edges,
        })
    }
}

/// Dijkstra from `source`, recording the last edge into each vertex.
fn shortest_path_tree(graph: &DirectedWeightedGraph, source: VertexId) -> PathTree {
    let mut tree: PathTree = vec![None; graph.vertex_count()];
    tree[source.0] = Some(Reached {
        weight: 0.0,
        prev_edge: None,
    });

    // Reverse turns the max-heap into a min-heap on (weight, vertex)
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(weight), vertex))) = heap.pop() {
        // Stale entry: a shorter path was already settled
        if tree[vertex.0].is_some_and(|reached| weight > reached.weight) {
            continue;
        }

        for &edge_id in graph.outgoing(vertex) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let candidate = weight + edge.weight;
            let improves = tree[edge.to.0].is_none_or(|reached| candidate < reached.weight);
            if improves {
                tree[edge.to.0] = Some(Reached {
                    weight: candidate,
                    prev_edge: Some(edge_id),
                });
                heap.push(Reverse((OrderedFloat(candidate), edge.to)));
            }
        }
    }

    tree
}
