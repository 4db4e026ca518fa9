// handlers/payment_handlers.rs
use axum::extract::{Json, Path, State};
use serde::Serialize;

use crate::errors::Result;
use crate::models::payment::PaymentRequest;
use crate::services::stripe_service::CheckoutStatusResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub url: String,
    pub session_id: String,
}

pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<CreateSessionResponse>> {
    let session = state.checkout.create_session(request).await?;

    Ok(Json(CreateSessionResponse {
        url: session.url,
        session_id: session.session_id,
    }))
}

pub async fn get_checkout_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<CheckoutStatusResponse>> {
    let checkout_status = state.checkout.get_status(&session_id).await?;
    Ok(Json(checkout_status))
}
