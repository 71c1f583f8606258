//! Domain types for the transport catalogue.
//!
//! This module contains the value types that describe a transit network:
//! stops with their coordinates, bus routes over those stops, and the
//! statistics derived from a route. Types enforce their invariants at
//! construction time.

mod bus;
mod error;
mod geo;
mod stat;
mod stop;

pub use bus::{Bus, BusId, effective_sequence};
pub use error::DomainError;
pub use geo::{Coordinates, EARTH_RADIUS_M, compute_distance};
pub use stat::BusStat;
pub use stop::{Stop, StopId};
