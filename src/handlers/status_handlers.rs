// handlers/status_handlers.rs
use axum::extract::{Json, State};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::errors::Result;
use crate::models::status_check::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;

const STATUS_COLLECTION: &str = "status_checks";

pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>> {
    let status_check = StatusCheck::new(input.client_name);

    state
        .db
        .collection::<StatusCheck>(STATUS_COLLECTION)
        .insert_one(&status_check)
        .await?;

    Ok(Json(status_check))
}

pub async fn get_status_checks(State(state): State<AppState>) -> Result<Json<Vec<StatusCheck>>> {
    let mut cursor = state
        .db
        .collection::<StatusCheck>(STATUS_COLLECTION)
        .find(doc! {})
        .limit(1000)
        .await?;

    let mut checks = Vec::new();
    while let Some(check) = cursor.try_next().await? {
        checks.push(check);
    }

    Ok(Json(checks))
}
