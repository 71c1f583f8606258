//! JSON request processing.
//!
//! A request document carries `base_requests` (stops and buses declaring
//! the network), optional `routing_settings`, and `stat_requests` (queries).
//! Processing builds the catalogue and router once, then answers every
//! query in order as one JSON array.

mod dto;
mod error;
mod handler;
mod ingest;

pub use dto::{
    BaseRequest, BusDeclaration, BusResponse, Document, ErrorResponse, NOT_FOUND, RouteItem,
    RouteResponse, StatRequest, StatResponse, StopDeclaration, StopResponse,
};
pub use error::{HandlerError, IngestError};
pub use handler::{RequestHandler, process};
pub use ingest::{IngestReport, ingest};
