//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::Network;
use crate::report::{self, LegSummary};
use crate::router::RouteResult;

/// Query parameters for route planning.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin station name.
    pub from: String,

    /// Destination station name.
    pub to: String,

    /// Override for the configured transfer penalty, in minutes.
    pub transfer_penalty_mins: Option<f64>,
}

/// One leg of a planned route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub from: String,
    pub to: String,
    pub line: String,
    pub mode: String,
    pub operator: String,
    pub minutes: f64,
}

impl LegResult {
    fn from_summary(leg: &LegSummary) -> Self {
        Self {
            from: leg.from.to_string(),
            to: leg.to.to_string(),
            line: leg.line.to_string(),
            mode: leg.mode.to_string(),
            operator: leg.operator.clone(),
            minutes: leg.minutes,
        }
    }
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Total cost in minutes, transfer penalties included.
    pub total_minutes: f64,

    /// Number of line changes.
    pub transfers: usize,

    /// Stations visited, origin first.
    pub stations: Vec<String>,

    /// Per-leg breakdown.
    pub legs: Vec<LegResult>,
}

impl RouteResponse {
    /// Build a response from a routing result.
    pub fn from_result(network: &Network, result: &RouteResult) -> Self {
        let legs = report::legs(network, result);
        Self {
            total_minutes: result.total_minutes,
            transfers: report::transfer_count(&legs),
            stations: result.stations.iter().map(|s| s.to_string()).collect(),
            legs: legs.iter().map(LegResult::from_summary).collect(),
        }
    }
}

/// Response for route planning.
///
/// `route` is null when no route exists; `message` then carries the
/// fixed no-route text.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub route: Option<RouteResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A station in the stations listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub accessible: bool,
}

/// Response for the stations listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Coordinates, LineId, StationAttributes, StationId, StationStatus, TransitMode,
    };
    use crate::network::Segment;

    #[test]
    fn route_response_from_result() {
        let mut network = Network::new();
        for name in ["A", "B"] {
            network.add_station(StationAttributes {
                id: StationId::from(name),
                coordinates: Coordinates { lat: 0.0, lon: 0.0 },
                status: StationStatus::Open,
                accessible: true,
            });
        }
        network.insert_segment(
            &StationId::new("A"),
            &StationId::new("B"),
            Segment::new(
                LineId::new("L1"),
                TransitMode::Cable,
                "Operador A".to_string(),
                7.5,
            ),
        );

        let result = RouteResult {
            total_minutes: 7.5,
            stations: vec![StationId::new("A"), StationId::new("B")],
        };
        let response = RouteResponse::from_result(&network, &result);

        assert_eq!(response.total_minutes, 7.5);
        assert_eq!(response.transfers, 0);
        assert_eq!(response.stations, vec!["A", "B"]);
        assert_eq!(response.legs.len(), 1);
        assert_eq!(response.legs[0].line, "L1");
        assert_eq!(response.legs[0].mode, "cable");

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"total_minutes\":7.5"));
    }

    #[test]
    fn plan_response_omits_absent_message() {
        let response = PlanResponse {
            route: None,
            message: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "{\"route\":null}");
    }
}
