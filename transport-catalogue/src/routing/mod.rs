//! Fastest-path routing between stops.
//!
//! Routing happens in two stages. [`build_graph`] turns a fully populated
//! catalogue into a [`RoutingGraph`] where each edge means "wait for a bus,
//! then ride it from one stop to a later one". [`TransportRouter`] then
//! answers point-to-point queries over that graph as alternating wait and
//! ride legs.

mod builder;
mod config;
mod error;
mod transport_router;

pub use builder::{RideLabel, RoutingGraph, build_graph};
pub use config::RoutingSettings;
pub use error::RoutingError;
pub use transport_router::{RouteLeg, RoutePlan, TransportRouter};
