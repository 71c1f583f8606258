//! The catalogue of stops, buses and road distances.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{trace, warn};

use super::error::CatalogueError;
use crate::domain::{Bus, BusId, Coordinates, DomainError, Stop, StopId};

/// Owner of every stop and bus in a transit network.
///
/// # Invariants
///
/// - stops and buses are never removed, so ids stay valid
/// - every `StopId` referenced by a bus indexes `stops`
/// - distances are directed; only the declared direction is authoritative
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    buses: Vec<Bus>,
    bus_index: HashMap<String, BusId>,
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, or move an existing stop of the same name.
    ///
    /// Re-declaring a stop keeps its `StopId` and replaces only its
    /// coordinates, so buses, distances and graph vertices built from the
    /// old declaration still point at it. Statistics computed afterwards
    /// use the new position.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName.into());
        }

        if let Some(&id) = self.stop_index.get(&name) {
            warn!(stop = %name, "stop declared twice, replacing its coordinates");
            self.stops[id.0].coordinates = coordinates;
            return Ok(id);
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        Ok(id)
    }

    /// Add a bus route over already-declared stops.
    ///
    /// The effective traversal sequence is computed here, once. A bus with
    /// an existing name replaces that bus in place.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the name is empty or the stop list is empty
    /// - any stop name is not in the catalogue
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName.into());
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }

        let declared = stop_names
            .iter()
            .map(|s| {
                self.stop_id(s.as_ref())
                    .ok_or_else(|| CatalogueError::UnknownStop(s.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let bus = Bus::new(name, &declared, is_roundtrip);
        trace!(
            bus = %bus.name(),
            declared = declared.len(),
            effective = bus.stops().len(),
            "bus added"
        );

        if let Some(&id) = self.bus_index.get(bus.name()) {
            warn!(bus = %bus.name(), "bus declared twice, replacing its route");
            self.buses[id.0] = bus;
            return Ok(id);
        }

        let id = BusId(self.buses.len());
        self.bus_index.insert(bus.name().to_string(), id);
        self.buses.push(bus);
        Ok(id)
    }

    /// Record the road distance in meters from one stop to another.
    ///
    /// A later declaration for the same ordered pair replaces the earlier one.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<(), CatalogueError> {
        let from_id = self
            .stop_id(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        let to_id = self
            .stop_id(to)
            .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;

        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Look up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.0])
    }

    /// Look up a bus by name.
    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| &self.buses[id.0])
    }

    /// Look up the id of a stop by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Returns the stop with the given id.
    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    /// Returns the bus with the given id.
    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.0)
    }

    /// Road distance in meters between two named stops.
    ///
    /// Falls back to the reverse direction when only that one was declared.
    /// Returns 0 when neither direction was declared, or when either stop
    /// is unknown.
    pub fn distance_between(&self, from: &str, to: &str) -> u32 {
        match (self.stop_id(from), self.stop_id(to)) {
            (Some(from_id), Some(to_id)) => self.distance(from_id, to_id),
            _ => 0,
        }
    }

    /// Road distance in meters between two stops, by id.
    ///
    /// Same fallback rules as [`distance_between`](Self::distance_between).
    /// An undeclared pair is 0: callers that sum distances treat it as a
    /// zero-length hop, not an error.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// Names of the buses whose effective route visits a stop, sorted.
    ///
    /// Returns `None` if the stop doesn't exist, and an empty set if it
    /// exists but no bus visits it.
    pub fn routes_through_stop(&self, name: &str) -> Option<BTreeSet<&str>> {
        let stop = self.stop_id(name)?;
        Some(
            self.buses
                .iter()
                .filter(|bus| bus.visits(stop))
                .map(Bus::name)
                .collect(),
        )
    }

    /// All stops visited by at least one bus, ordered by name.
    pub fn stops_in_routes(&self) -> Vec<&Stop> {
        let ids: BTreeSet<StopId> = self
            .buses
            .iter()
            .flat_map(|bus| bus.stops().iter().copied())
            .collect();

        let mut stops: Vec<&Stop> = ids.into_iter().map(|id| &self.stops[id.0]).collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));
        stops
    }

    /// All buses, ordered by name.
    pub fn buses_by_name(&self) -> BTreeMap<&str, &Bus> {
        self.buses.iter().map(|bus| (bus.name(), bus)).collect()
    }

    /// All stops in insertion order; a stop's position is its `StopId`.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order; a bus's position is its `BusId`.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Returns the number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns the number of buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Returns the number of declared directed distances.
    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }
}
