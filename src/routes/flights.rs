use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::flight_handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/places/suggestions", get(flight_handlers::place_suggestions))
        .route("/flights/search", post(flight_handlers::search_flights))
        .route("/flights/offers/:offer_id", get(flight_handlers::get_offer))
}
