use axum::{routing::post, Router};

use crate::handlers::status_handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/status",
        post(status_handlers::create_status_check).get(status_handlers::get_status_checks),
    )
}
