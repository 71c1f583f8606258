//! Transport catalogue: the owner of every stop and bus.
//!
//! Stops and buses live in append-only arenas and are cross-referenced by
//! index, so a `StopId` or `BusId` handed out once stays valid for the
//! catalogue's lifetime. Name lookups are hash-indexed.

mod error;
mod stats;
mod transport_catalogue;

pub use error::CatalogueError;
pub use transport_catalogue::TransportCatalogue;
