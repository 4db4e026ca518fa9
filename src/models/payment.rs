use std::collections::HashMap;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub flight_offer_id: String,
    pub amount: f64,
    pub currency: String,
    pub origin_url: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Stored record of a checkout session. Created exactly once per session;
/// only `status`, `payment_status` and `updated_at` ever change afterwards,
/// and only from provider-fresh data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTransaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub session_id: String,
    pub flight_offer_id: String,
    pub amount: f64,
    pub currency: String,
    pub metadata: HashMap<String, String>,
    pub status: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
