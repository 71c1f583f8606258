//! Data transfer objects for the JSON request document and its response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::BusStat;
use crate::routing::{RouteLeg, RoutePlan, RoutingSettings};

/// The whole input document.
///
/// Declarations stay raw JSON here and are decoded one by one during
/// ingest, so a single malformed entry is skipped rather than failing the
/// document. Keys such as `render_settings` belong to an external map
/// renderer and are ignored.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// Network declarations, each decoded as a [`BaseRequest`]
    #[serde(default)]
    pub base_requests: Vec<serde_json::Value>,

    /// Queries, answered in order
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,

    /// Travel time parameters (defaults apply when absent)
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
}

/// A network declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopDeclaration),
    Bus(BusDeclaration),
}

/// A stop and the road distances from it to its neighbours.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDeclaration {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Meters from this stop to each named stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus route.
#[derive(Debug, Clone, Deserialize)]
pub struct BusDeclaration {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// A query against the built network.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    /// Returns the request id echoed in the response.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Statistics for a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    /// Serialized as `null` when not a finite number
    pub curvature: f64,
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

/// Buses through a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    pub buses: Vec<String>,
}

/// A fastest route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

/// One leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

/// A request that could not be answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}

/// Any response in the output array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Error(ErrorResponse),
}

/// Error message for a missing bus, stop or route.
pub const NOT_FOUND: &str = "not found";

// Conversion implementations

impl BusResponse {
    /// Create from domain statistics.
    pub fn from_stat(request_id: i64, stat: &BusStat) -> Self {
        Self {
            request_id,
            curvature: stat.curvature,
            route_length: stat.route_length,
            stop_count: stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }
}

impl RouteResponse {
    /// Create from a route plan.
    pub fn from_plan(request_id: i64, plan: &RoutePlan) -> Self {
        Self {
            request_id,
            total_time: plan.total_time,
            items: plan.legs.iter().map(RouteItem::from_leg).collect(),
        }
    }
}

impl RouteItem {
    /// Create from a route leg.
    pub fn from_leg(leg: &RouteLeg) -> Self {
        match leg {
            RouteLeg::Wait { stop_name, time } => RouteItem::Wait {
                stop_name: stop_name.clone(),
                time: *time,
            },
            RouteLeg::Ride {
                bus,
                span_count,
                time,
            } => RouteItem::Bus {
                bus: bus.clone(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

impl ErrorResponse {
    /// A "not found" answer.
    pub fn not_found(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: NOT_FOUND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_document() {
        let doc: Document = serde_json::from_value(json!({
            "base_requests": [
                {
                    "type": "Stop",
                    "name": "A",
                    "latitude": 55.5,
                    "longitude": 37.5,
                    "road_distances": {"B": 1200}
                },
                {"type": "Stop", "name": "B", "latitude": 55.6, "longitude": 37.6},
                {"type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false}
            ],
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
            "render_settings": {"width": 600},
            "stat_requests": [
                {"id": 1, "type": "Bus", "name": "14"},
                {"id": 2, "type": "Stop", "name": "A"},
                {"id": 3, "type": "Route", "from": "A", "to": "B"},
                {"id": 4, "type": "Map"}
            ]
        }))
        .unwrap();

        assert_eq!(doc.base_requests.len(), 3);
        let declarations: Vec<BaseRequest> = doc
            .base_requests
            .iter()
            .map(|raw| BaseRequest::deserialize(raw).unwrap())
            .collect();
        match &declarations[0] {
            BaseRequest::Stop(stop) => {
                assert_eq!(stop.name, "A");
                assert_eq!(stop.road_distances.get("B"), Some(&1200));
            }
            other => panic!("expected stop, got {other:?}"),
        }
        match &declarations[1] {
            BaseRequest::Stop(stop) => assert!(stop.road_distances.is_empty()),
            other => panic!("expected stop, got {other:?}"),
        }
        match &declarations[2] {
            BaseRequest::Bus(bus) => {
                assert_eq!(bus.stops, vec!["A", "B"]);
                assert!(!bus.is_roundtrip);
            }
            other => panic!("expected bus, got {other:?}"),
        }
        assert_eq!(doc.routing_settings, Some(RoutingSettings::new(2, 30.0)));

        let ids: Vec<_> = doc.stat_requests.iter().map(StatRequest::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_document() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.base_requests.is_empty());
        assert!(doc.stat_requests.is_empty());
        assert!(doc.routing_settings.is_none());
    }

    #[test]
    fn malformed_declaration_does_not_fail_document() {
        let doc: Document = serde_json::from_value(json!({
            "base_requests": [
                {"type": "Bus", "name": "bad", "stops": ["A", "B"]},
                {"type": "Stop", "name": "A", "latitude": "north", "longitude": 0.0}
            ]
        }))
        .unwrap();

        assert_eq!(doc.base_requests.len(), 2);
        assert!(BaseRequest::deserialize(&doc.base_requests[0]).is_err());
        assert!(BaseRequest::deserialize(&doc.base_requests[1]).is_err());
    }

    #[test]
    fn negative_road_distance_rejected() {
        let result = BaseRequest::deserialize(&json!({
            "type": "Stop",
            "name": "A",
            "latitude": 0.0,
            "longitude": 0.0,
            "road_distances": {"B": -5}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_request_type_rejected() {
        let result: Result<StatRequest, _> =
            serde_json::from_value(json!({"id": 1, "type": "Tram", "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn serialize_bus_response() {
        let response = StatResponse::Bus(BusResponse {
            request_id: 7,
            curvature: 1.5,
            route_length: 4500,
            stop_count: 5,
            unique_stop_count: 3,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "request_id": 7,
                "curvature": 1.5,
                "route_length": 4500,
                "stop_count": 5,
                "unique_stop_count": 3
            })
        );
    }

    #[test]
    fn nan_curvature_serializes_as_null() {
        let response = BusResponse {
            request_id: 1,
            curvature: f64::NAN,
            route_length: 0,
            stop_count: 1,
            unique_stop_count: 1,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value["curvature"].is_null());
    }

    #[test]
    fn serialize_route_items() {
        let plan = RoutePlan {
            total_time: 11.0,
            legs: vec![
                RouteLeg::Wait {
                    stop_name: "A".into(),
                    time: 6.0,
                },
                RouteLeg::Ride {
                    bus: "297".into(),
                    span_count: 2,
                    time: 5.0,
                },
            ],
        };
        let response = StatResponse::Route(RouteResponse::from_plan(3, &plan));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "request_id": 3,
                "total_time": 11.0,
                "items": [
                    {"type": "Wait", "stop_name": "A", "time": 6.0},
                    {"type": "Bus", "bus": "297", "span_count": 2, "time": 5.0}
                ]
            })
        );
    }

    #[test]
    fn serialize_not_found() {
        let response = StatResponse::Error(ErrorResponse::not_found(9));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"request_id": 9, "error_message": "not found"})
        );
    }
}
