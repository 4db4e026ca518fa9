use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::handlers::payment_handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(payments_health))
        .route(
            "/v1/checkout/session",
            post(payment_handlers::create_checkout_session),
        )
        .route(
            "/v1/checkout/status/:session_id",
            get(payment_handlers::get_checkout_status),
        )
}

async fn payments_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "payments",
        "timestamp": Utc::now().to_rfc3339(),
        "features": ["checkout-session", "checkout-status"]
    }))
}
