//! Routing graph construction.
//!
//! Every stop is a vertex, with `VertexId(i)` standing for `StopId(i)`.
//! For every bus and every pair of positions `i < j` in its effective
//! sequence there is one edge from the stop at `i` to the stop at `j`,
//! weighted with the wait time plus the ride time over the whole span.
//! Boarding once and riding several stops is therefore a single edge, and
//! every change of bus costs another wait.

use std::sync::Arc;

use tracing::debug;

use super::{RoutingError, RoutingSettings};
use crate::catalogue::TransportCatalogue;
use crate::domain::StopId;
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};

/// What riding along one graph edge means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideLabel {
    /// Name of the bus ridden
    pub bus: Arc<str>,
    /// Number of stops travelled (end index minus start index)
    pub span_count: usize,
}

/// The weighted graph for a catalogue snapshot, with labels for its edges.
///
/// Owns copies of the stop and bus names it needs, so it stays usable
/// without borrowing the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingGraph {
    graph: DirectedWeightedGraph,
    rides: Vec<RideLabel>,
    stop_names: Vec<Arc<str>>,
    settings: RoutingSettings,
}

impl RoutingGraph {
    /// Returns the underlying graph.
    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Returns the ride an edge stands for.
    pub fn ride(&self, edge: EdgeId) -> Option<&RideLabel> {
        self.rides.get(edge.0)
    }

    /// Returns the name of the stop a vertex stands for.
    pub fn stop_name(&self, vertex: VertexId) -> Option<&str> {
        self.stop_names.get(vertex.0).map(|name| &**name)
    }

    /// Returns the settings the graph was built with.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub(super) fn into_parts(
        self,
    ) -> (DirectedWeightedGraph, Vec<RideLabel>, Vec<Arc<str>>, RoutingSettings) {
        (self.graph, self.rides, self.stop_names, self.settings)
    }
}

/// Build the routing graph for a fully populated catalogue.
///
/// Buses are visited in catalogue insertion order and spans by ascending
/// start then end position, so the same catalogue always produces the same
/// edge ids. Ride distance is accumulated span by span, using the same
/// directed-distance fallback as route statistics.
///
/// # Errors
///
/// Returns `Err` if the settings are invalid.
pub fn build_graph(
    catalogue: &TransportCatalogue,
    settings: &RoutingSettings,
) -> Result<RoutingGraph, RoutingError> {
    settings.validate()?;

    let mut graph = DirectedWeightedGraph::new(catalogue.stop_count());
    let mut rides = Vec::new();
    let wait = settings.wait_minutes();

    for bus in catalogue.buses() {
        let name: Arc<str> = Arc::from(bus.name());
        let stops = bus.stops();

        for (i, &start) in stops.iter().enumerate() {
            let mut meters = 0.0;
            for j in (i + 1)..stops.len() {
                meters += f64::from(catalogue.distance(stops[j - 1], stops[j]));
                graph.add_edge(Edge {
                    from: vertex(start),
                    to: vertex(stops[j]),
                    weight: wait + settings.ride_minutes(meters),
                })?;
                rides.push(RideLabel {
                    bus: Arc::clone(&name),
                    span_count: j - i,
                });
            }
        }
    }

    debug!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        edges = graph.edge_count(),
        "routing graph built"
    );

    Ok(RoutingGraph {
        graph,
        rides,
        stop_names: catalogue
            .stops()
            .iter()
            .map(|stop| Arc::from(stop.name.as_str()))
            .collect(),
        settings: *settings,
    })
}

fn vertex(stop: StopId) -> VertexId {
    VertexId(stop.0)
}
