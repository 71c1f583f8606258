//! Stop-to-stop routing facade.

use std::sync::Arc;

use tracing::trace;

use super::{RideLabel, RoutingError, RoutingGraph, RoutingSettings};
use crate::catalogue::TransportCatalogue;
use crate::graph::{RouteInfo, Router, VertexId};

/// One step of a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteLeg {
    /// Wait at a stop for the next bus
    Wait { stop_name: String, time: f64 },
    /// Ride a bus for `span_count` stops
    Ride {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteLeg {
    /// Returns the minutes this leg takes.
    pub fn time(&self) -> f64 {
        match self {
            RouteLeg::Wait { time, .. } | RouteLeg::Ride { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait leg.
    pub fn is_wait(&self) -> bool {
        matches!(self, RouteLeg::Wait { .. })
    }

    /// Returns true if this is a ride leg.
    pub fn is_ride(&self) -> bool {
        matches!(self, RouteLeg::Ride { .. })
    }
}

/// The fastest way from one stop to another.
///
/// # Invariants
///
/// - legs alternate Wait, Ride, Wait, Ride, ... starting with a Wait
/// - `total_time` is the sum of the leg times
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub total_time: f64,
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    /// Returns the number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_ride()).count()
    }
}

/// Answers fastest-path queries between stops.
///
/// Holds the graph and settings only; the catalogue is borrowed per query
/// to resolve stop names.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    router: Router,
    rides: Vec<RideLabel>,
    stop_names: Vec<Arc<str>>,
    settings: RoutingSettings,
}

impl TransportRouter {
    /// Build a router over a routing graph.
    pub fn new(routing_graph: RoutingGraph) -> Self {
        let (graph, rides, stop_names, settings) = routing_graph.into_parts();
        Self {
            router: Router::new(graph),
            rides,
            stop_names,
            settings,
        }
    }

    /// Find the fastest route between two stops by name.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - either stop is unknown to the catalogue, or was added after the
    ///   graph was built
    /// - no sequence of rides connects the stops
    pub fn build_route(
        &self,
        catalogue: &TransportCatalogue,
        from: &str,
        to: &str,
    ) -> Result<RoutePlan, RoutingError> {
        let from_vertex = self.vertex(catalogue, from)?;
        let to_vertex = self.vertex(catalogue, to)?;

        let info = self
            .router
            .build_route(from_vertex, to_vertex)
            .ok_or_else(|| RoutingError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let plan = self.expand(&info);
        trace!(
            from,
            to,
            total_time = plan.total_time,
            rides = plan.ride_count(),
            "route built"
        );
        Ok(plan)
    }

    fn vertex(&self, catalogue: &TransportCatalogue, name: &str) -> Result<VertexId, RoutingError> {
        catalogue
            .stop_id(name)
            .map(|id| VertexId(id.0))
            .filter(|vertex| vertex.0 < self.router.graph().vertex_count())
            .ok_or_else(|| RoutingError::StopNotFound(name.to_string()))
    }

    /// Turn each edge of a path into a wait leg followed by a ride leg.
    fn expand(&self, info: &RouteInfo) -> RoutePlan {
        let wait = self.settings.wait_minutes();
        let graph = self.router.graph();
        let mut legs = Vec::with_capacity(info.edges.len() * 2);

        for &edge_id in &info.edges {
            // Safe: edge ids come from this router's graph, and rides and
            // stop names were built alongside it
            let edge = &graph.edges()[edge_id.0];
            let ride = &self.rides[edge_id.0];

            legs.push(RouteLeg::Wait {
                stop_name: self.stop_names[edge.from.0].to_string(),
                time: wait,
            });
            legs.push(RouteLeg::Ride {
                bus: ride.bus.to_string(),
                span_count: ride.span_count,
                time: edge.weight - wait,
            });
        }

        RoutePlan {
            total_time: info.weight,
            legs,
        }
    }
}
