//! Bus route type.
//!
//! A `Bus` refers to the stops it visits by `StopId`, never by value: the
//! catalogue owns every stop. The stored sequence is the *effective* one,
//! already expanded for out-and-back routes, so statistics and the routing
//! graph builder walk exactly the same traversal.

use std::fmt;

use super::StopId;

/// Index of a bus in the catalogue's bus arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(pub usize);

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Expand a declared stop list into the sequence a bus actually traverses.
///
/// A roundtrip route already lists its physical path and is returned as-is.
/// An out-and-back route runs to its last stop and back again, so the
/// declared list is followed by its reverse without the turnaround stop.
///
/// # Examples
///
/// ```
/// use transport_catalogue::domain::effective_sequence;
///
/// assert_eq!(effective_sequence(&['A', 'B', 'C'], false), vec!['A', 'B', 'C', 'B', 'A']);
/// assert_eq!(effective_sequence(&['A', 'B', 'A'], true), vec!['A', 'B', 'A']);
/// ```
pub fn effective_sequence<T: Clone>(declared: &[T], is_roundtrip: bool) -> Vec<T> {
    if is_roundtrip || declared.len() < 2 {
        return declared.to_vec();
    }

    let mut sequence = Vec::with_capacity(declared.len() * 2 - 1);
    sequence.extend_from_slice(declared);
    sequence.extend(declared.iter().rev().skip(1).cloned());
    sequence
}

/// A named bus route over catalogue stops.
///
/// # Invariants
///
/// - `stops` is the effective sequence (see [`effective_sequence`])
/// - every id in `stops` belongs to the catalogue that created the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    name: String,
    stops: Vec<StopId>,
    declared_len: usize,
    is_roundtrip: bool,
}

impl Bus {
    /// Create a bus from its declared stop list, expanding it once.
    pub fn new(name: impl Into<String>, declared: &[StopId], is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops: effective_sequence(declared, is_roundtrip),
            declared_len: declared.len(),
            is_roundtrip,
        }
    }

    /// Returns the bus name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the effective stop sequence.
    pub fn stops(&self) -> &[StopId] {
        &self.stops
    }

    /// Returns true if the route was declared as a roundtrip.
    pub fn is_roundtrip(&self) -> bool {
        self.is_roundtrip
    }

    /// Returns true if the effective sequence visits the stop.
    pub fn visits(&self, stop: StopId) -> bool {
        self.stops.contains(&stop)
    }

    /// Returns the terminal stops a map would label.
    ///
    /// The first stop, plus the turnaround stop of an out-and-back route
    /// when it differs from the first.
    pub fn terminals(&self) -> Vec<StopId> {
        let Some(&first) = self.stops.first() else {
            return Vec::new();
        };

        if self.is_roundtrip {
            return vec![first];
        }

        let turnaround = self.stops[self.declared_len - 1];
        if turnaround == first {
            vec![first]
        } else {
            vec![first, turnaround]
        }
    }

    /// Consecutive stop pairs along the effective sequence.
    pub fn segments(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
