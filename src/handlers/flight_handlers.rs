// handlers/flight_handlers.rs
use axum::extract::{Json, Path, Query, State};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;
use validator::Validate;

use crate::errors::{AppError, Result, UpstreamError};
use crate::models::flight::{FlightSearch, FlightSearchRequest, SuggestionQuery};
use crate::state::AppState;

/// Place autocomplete is deliberately non-fatal: short queries and any
/// upstream failure both come back as an empty result set.
pub async fn place_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionQuery>,
) -> Json<Value> {
    if params.query.chars().count() < 2 {
        return Json(json!({ "data": [] }));
    }

    match state.flights.place_suggestions(&params.query, &params.types).await {
        Ok(suggestions) => Json(suggestions),
        Err(e) => {
            warn!("Places API error: {}", e);
            Json(json!({ "data": [] }))
        }
    }
}

pub async fn search_flights(
    State(state): State<AppState>,
    Json(request): Json<FlightSearchRequest>,
) -> Result<Json<Value>> {
    request.validate()?;

    let response = state
        .flights
        .search_offers(&request)
        .await
        .map_err(|e| flight_upstream_error(e, "Flight search failed"))?;

    // A response without data.id is malformed; better a 500 than an
    // unkeyed search record.
    let offer_request_id = response["data"]["id"]
        .as_str()
        .ok_or_else(|| AppError::internal("Flight search response missing data.id"))?
        .to_string();

    let search = FlightSearch {
        offer_request_id,
        origin: request.origin,
        destination: request.destination,
        departure_date: request.departure_date,
        return_date: request.return_date,
        passengers: request.passengers,
        cabin_class: request.cabin_class,
        created_at: Utc::now(),
    };
    state.searches.insert(search).await?;

    Ok(Json(response))
}

pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<Value>> {
    let offer = state
        .flights
        .get_offer(&offer_id)
        .await
        .map_err(|e| flight_upstream_error(e, "Duffel API error"))?;

    Ok(Json(offer))
}

// Timeouts become 408, provider statuses are propagated with the body text,
// anything else is a 500.
fn flight_upstream_error(err: UpstreamError, context: &str) -> AppError {
    match err {
        UpstreamError::Timeout => AppError::UpstreamTimeout,
        UpstreamError::Status { status, body } => AppError::Upstream {
            status,
            detail: format!("{}: {}", context, body),
        },
        UpstreamError::Transport(message) => AppError::internal(message),
    }
}
