// services/duffel_service.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::UpstreamError;
use crate::models::flight::FlightSearchRequest;

const DUFFEL_API_BASE: &str = "https://api.duffel.com";

/// Outbound interface to the flight-offer provider. Handlers only see this
/// trait so tests can substitute a fake.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn place_suggestions(&self, query: &str, types: &str) -> Result<Value, UpstreamError>;
    async fn search_offers(&self, request: &FlightSearchRequest) -> Result<Value, UpstreamError>;
    async fn get_offer(&self, offer_id: &str) -> Result<Value, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct DuffelService {
    access_token: String,
    base_url: String,
    client: Client,
}

impl DuffelService {
    pub fn new(access_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        DuffelService {
            access_token,
            base_url: DUFFEL_API_BASE.to_string(),
            client,
        }
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header("Duffel-Version", "v2")
            .header(header::ACCEPT, "application/json")
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            error!("Duffel API error: {} - {}", status, body);
            return Err(UpstreamError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

/// Request body for Duffel's offer-request endpoint: one slice per leg
/// (the return slice is the outbound one reversed) and one adult entry
/// per seat.
pub fn offer_request_payload(request: &FlightSearchRequest) -> Value {
    let mut slices = vec![json!({
        "origin": request.origin,
        "destination": request.destination,
        "departure_date": request.departure_date,
    })];

    if let Some(return_date) = &request.return_date {
        slices.push(json!({
            "origin": request.destination,
            "destination": request.origin,
            "departure_date": return_date,
        }));
    }

    let passengers: Vec<Value> = (0..request.passengers)
        .map(|_| json!({ "type": "adult" }))
        .collect();

    json!({
        "data": {
            "slices": slices,
            "passengers": passengers,
            "cabin_class": request.cabin_class,
            "return_offers": true,
        }
    })
}

#[async_trait]
impl FlightProvider for DuffelService {
    async fn place_suggestions(&self, query: &str, types: &str) -> Result<Value, UpstreamError> {
        let mut params = vec![("query".to_string(), query.to_string())];
        for place_type in types.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            params.push(("types[]".to_string(), place_type.to_string()));
        }

        let response = self
            .with_headers(self.client.get(format!("{}/places/suggestions", self.base_url)))
            .query(&params)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn search_offers(&self, request: &FlightSearchRequest) -> Result<Value, UpstreamError> {
        info!(
            "Searching offers {} -> {} on {}",
            request.origin, request.destination, request.departure_date
        );

        let response = self
            .with_headers(self.client.post(format!("{}/air/offer_requests", self.base_url)))
            .json(&offer_request_payload(request))
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn get_offer(&self, offer_id: &str) -> Result<Value, UpstreamError> {
        let response = self
            .with_headers(self.client.get(format!("{}/air/offers/{}", self.base_url, offer_id)))
            .send()
            .await?;

        Self::read_json(response).await
    }
}
