//! Stop type.

use std::fmt;

use super::Coordinates;

/// Index of a stop in the catalogue's stop arena.
///
/// Stops are never removed, so an id stays valid for the lifetime of the
/// catalogue that issued it. It doubles as the stop's routing graph vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named geographic point in the transit network.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name
    pub name: String,
    /// Location of the stop
    pub coordinates: Coordinates,
}

impl Stop {
    /// Create a new stop.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
