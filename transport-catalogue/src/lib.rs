//! Bus network catalogue and fastest-route planner.
//!
//! Stops, buses and road distances are loaded into a
//! [`catalogue::TransportCatalogue`], which answers per-bus and per-stop
//! statistics. A [`routing::TransportRouter`] built from it answers
//! "how do I get from here to there fastest?" as a sequence of waits
//! and rides.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod io;
pub mod routing;
