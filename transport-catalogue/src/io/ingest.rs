//! Loading declarations into a catalogue.

use serde::Deserialize;
use tracing::{debug, warn};

use super::dto::{BaseRequest, BusDeclaration, StopDeclaration};
use super::error::IngestError;
use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::Coordinates;

/// What happened while loading declarations.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Stops declared (including re-declarations)
    pub stops: usize,
    /// Directed distances recorded
    pub distances: usize,
    /// Buses declared (including re-declarations)
    pub buses: usize,
    /// Rejected declarations, each with the name of the entity it declared
    /// (or its position in the list when it has no readable name)
    pub rejected: Vec<(String, IngestError)>,
}

/// Load raw JSON declarations into a catalogue.
///
/// Each entry is decoded on its own; one that isn't a well-formed stop or
/// bus is rejected without affecting the others. Declarations may appear
/// in any order: all stops are added first, then all road distances, then
/// all buses. A rejected declaration is logged and recorded in the report;
/// the rest are still loaded.
pub fn ingest(catalogue: &mut TransportCatalogue, requests: &[serde_json::Value]) -> IngestReport {
    let mut report = IngestReport::default();

    let mut stops: Vec<StopDeclaration> = Vec::new();
    let mut buses: Vec<BusDeclaration> = Vec::new();
    for (position, raw) in requests.iter().enumerate() {
        match BaseRequest::deserialize(raw) {
            Ok(BaseRequest::Stop(stop)) => stops.push(stop),
            Ok(BaseRequest::Bus(bus)) => buses.push(bus),
            Err(e) => reject(&mut report, &declared_name(raw, position), e.into()),
        }
    }

    for stop in &stops {
        let added = Coordinates::new(stop.latitude, stop.longitude)
            .map_err(CatalogueError::from)
            .and_then(|coordinates| catalogue.add_stop(stop.name.as_str(), coordinates));
        match added {
            Ok(_) => report.stops += 1,
            Err(e) => reject(&mut report, &stop.name, e.into()),
        }
    }

    for stop in &stops {
        for (to, &meters) in &stop.road_distances {
            match catalogue.add_distance(&stop.name, to, meters) {
                Ok(()) => report.distances += 1,
                Err(e) => reject(&mut report, &stop.name, e.into()),
            }
        }
    }

    for bus in &buses {
        match catalogue.add_bus(bus.name.as_str(), bus.stops.as_slice(), bus.is_roundtrip) {
            Ok(_) => report.buses += 1,
            Err(e) => reject(&mut report, &bus.name, e.into()),
        }
    }

    debug!(
        stops = report.stops,
        distances = report.distances,
        buses = report.buses,
        rejected = report.rejected.len(),
        "declarations ingested"
    );

    report
}

/// Best-effort label for a declaration that failed to decode.
fn declared_name(raw: &serde_json::Value, position: usize) -> String {
    raw.get("name")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("#{position}"), str::to_string)
}

fn reject(report: &mut IngestReport, name: &str, error: IngestError) {
    warn!(entity = %name, error = %error, "declaration rejected");
    report.rejected.push((name.to_string(), error));
}
