//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::debug;

use crate::domain::StationId;
use crate::report;
use crate::router::shortest_route;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations surviving rule application.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let mut stations: Vec<StationResult> = state
        .network
        .stations()
        .map(|attrs| StationResult {
            id: attrs.id.to_string(),
            lat: attrs.coordinates.lat,
            lon: attrs.coordinates.lon,
            accessible: attrs.accessible,
        })
        .collect();
    stations.sort_by(|a, b| a.id.cmp(&b.id));
    Json(StationsResponse { stations })
}

/// Plan a route between two stations.
///
/// Unknown stations and genuinely unreachable destinations both
/// produce a null route with the no-route message, not an error.
async fn plan_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    if query.from.trim().is_empty() || query.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "both 'from' and 'to' must be given".to_string(),
        });
    }

    let origin = StationId::new(query.from);
    let destination = StationId::new(query.to);
    let penalty = query
        .transfer_penalty_mins
        .unwrap_or(state.rules.transfer_penalty_mins);

    debug!(%origin, %destination, penalty, "planning route");
    let result = shortest_route(&state.network, &origin, &destination, penalty);

    let response = match result {
        Some(result) => PlanResponse {
            route: Some(RouteResponse::from_result(&state.network, &result)),
            message: None,
        },
        None => PlanResponse {
            route: None,
            message: Some(report::NO_ROUTE_MESSAGE.to_string()),
        },
    };
    Ok(Json(response))
}

/// Application-level error for request handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };
        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
