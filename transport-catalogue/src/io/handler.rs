//! Answering stat requests against a built network.

use std::io::{Read, Write};

use tracing::{debug, info, trace};

use super::dto::{
    BusResponse, Document, ErrorResponse, RouteResponse, StatRequest, StatResponse, StopResponse,
};
use super::error::HandlerError;
use super::ingest::{IngestReport, ingest};
use crate::catalogue::TransportCatalogue;
use crate::routing::{RoutingError, RoutingSettings, TransportRouter, build_graph};

/// Error message for map requests; drawing belongs to an external renderer.
const MAP_UNSUPPORTED: &str = "map rendering is not supported";

/// A fully loaded catalogue together with its router.
///
/// Construction runs the whole build stage (ingest, then graph), so by the
/// time a handler exists every query can be answered.
#[derive(Debug)]
pub struct RequestHandler {
    catalogue: TransportCatalogue,
    router: TransportRouter,
}

impl RequestHandler {
    /// Build the catalogue and router from a document's declarations.
    ///
    /// Missing routing settings fall back to [`RoutingSettings::default`].
    pub fn from_document(document: &Document) -> Result<(Self, IngestReport), HandlerError> {
        let mut catalogue = TransportCatalogue::new();
        let report = ingest(&mut catalogue, &document.base_requests);

        let settings = document.routing_settings.unwrap_or_default();
        let handler = Self::new(catalogue, &settings)?;
        Ok((handler, report))
    }

    /// Build the router for an already populated catalogue.
    pub fn new(
        catalogue: TransportCatalogue,
        settings: &RoutingSettings,
    ) -> Result<Self, HandlerError> {
        let graph = build_graph(&catalogue, settings)?;
        Ok(Self {
            router: TransportRouter::new(graph),
            catalogue,
        })
    }

    /// Returns the catalogue.
    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// Answer one request.
    pub fn answer(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        let response = match request {
            StatRequest::Bus { name, .. } => match self.catalogue.bus_stat(name) {
                Some(stat) => StatResponse::Bus(BusResponse::from_stat(id, &stat)),
                None => StatResponse::Error(ErrorResponse::not_found(id)),
            },
            StatRequest::Stop { name, .. } => match self.catalogue.routes_through_stop(name) {
                Some(buses) => StatResponse::Stop(StopResponse {
                    request_id: id,
                    buses: buses.into_iter().map(str::to_string).collect(),
                }),
                None => StatResponse::Error(ErrorResponse::not_found(id)),
            },
            StatRequest::Route { from, to, .. } => {
                match self.router.build_route(&self.catalogue, from, to) {
                    Ok(plan) => StatResponse::Route(RouteResponse::from_plan(id, &plan)),
                    Err(RoutingError::StopNotFound(_) | RoutingError::Unreachable { .. }) => {
                        StatResponse::Error(ErrorResponse::not_found(id))
                    }
                    Err(e) => StatResponse::Error(ErrorResponse {
                        request_id: id,
                        error_message: e.to_string(),
                    }),
                }
            }
            StatRequest::Map { .. } => StatResponse::Error(ErrorResponse {
                request_id: id,
                error_message: MAP_UNSUPPORTED.to_string(),
            }),
        };

        trace!(request_id = id, ?response, "request answered");
        response
    }

    /// Answer requests in order.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|r| self.answer(r)).collect()
    }
}

/// Read a document, answer its stat requests and write the JSON response array.
pub fn process<R: Read, W: Write>(input: R, output: W) -> Result<(), HandlerError> {
    let document: Document = serde_json::from_reader(input)?;
    let (handler, report) = RequestHandler::from_document(&document)?;

    info!(
        stops = handler.catalogue().stop_count(),
        buses = handler.catalogue().bus_count(),
        rejected = report.rejected.len(),
        requests = document.stat_requests.len(),
        "network loaded"
    );

    let responses = handler.answer_all(&document.stat_requests);
    serde_json::to_writer_pretty(output, &responses)?;

    debug!(responses = responses.len(), "responses written");
    Ok(())
}
