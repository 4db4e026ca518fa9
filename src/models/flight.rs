use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlightSearchRequest {
    #[validate(length(min = 1, message = "origin is required"))]
    pub origin: String,
    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,
    #[validate(length(min = 1, message = "departure_date is required"))]
    pub departure_date: String,
    pub return_date: Option<String>,
    #[serde(default = "default_passengers")]
    #[validate(range(min = 1, max = 9, message = "passengers must be between 1 and 9"))]
    pub passengers: u32,
    #[serde(default = "default_cabin_class")]
    pub cabin_class: String,
}

fn default_passengers() -> u32 {
    1
}

fn default_cabin_class() -> String {
    "economy".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_place_types")]
    pub types: String,
}

fn default_place_types() -> String {
    "airport".to_string()
}

/// Record of a completed offer-request, keyed by the id Duffel assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSearch {
    pub offer_request_id: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub passengers: u32,
    pub cabin_class: String,
    pub created_at: DateTime<Utc>,
}
