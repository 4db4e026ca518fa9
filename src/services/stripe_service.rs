// services/stripe_service.rs
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::UpstreamError;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

#[derive(Debug, Clone)]
pub struct CheckoutSessionRequest {
    pub amount: f64,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct CheckoutSessionResponse {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutStatusResponse {
    pub status: String,
    pub payment_status: String,
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
    pub metadata: HashMap<String, String>,
}

/// Outbound interface to the checkout provider, substitutable in tests.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, UpstreamError>;

    async fn get_checkout_status(
        &self,
        session_id: &str,
    ) -> Result<CheckoutStatusResponse, UpstreamError>;
}

// Stripe's wire shape for a checkout session; only the fields we read.
#[derive(Debug, Deserialize)]
struct StripeSession {
    id: String,
    #[serde(default)]
    url: Option<String>,
    status: String,
    payment_status: String,
    #[serde(default)]
    amount_total: Option<i64>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct StripeService {
    secret_key: String,
    base_url: String,
    client: Client,
}

impl StripeService {
    pub fn new(secret_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        StripeService {
            secret_key,
            base_url: STRIPE_API_BASE.to_string(),
            client,
        }
    }

    async fn read_session(response: reqwest::Response) -> Result<StripeSession, UpstreamError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            error!("Stripe API error: {} - {}", status, body);
            return Err(UpstreamError::Status { status, body });
        }
        Ok(response.json().await?)
    }
}

/// Form-encoded body for `POST /checkout/sessions`: one ad-hoc line item
/// priced in minor units, plus the caller's metadata.
fn session_form(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let unit_amount = (request.amount * 100.0).round() as i64;

    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), request.success_url.clone()),
        ("cancel_url".to_string(), request.cancel_url.clone()),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
        (
            "line_items[0][price_data][currency]".to_string(),
            request.currency.to_lowercase(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            unit_amount.to_string(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            "Flight booking".to_string(),
        ),
    ];

    for (key, value) in &request.metadata {
        form.push((format!("metadata[{}]", key), value.clone()));
    }

    form
}

#[async_trait]
impl PaymentProvider for StripeService {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSessionResponse, UpstreamError> {
        info!(
            "Creating checkout session for {} {}",
            request.amount, request.currency
        );

        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&session_form(request))
            .send()
            .await?;

        let session = Self::read_session(response).await?;
        let url = session.url.ok_or_else(|| {
            UpstreamError::Transport("checkout session response missing redirect url".to_string())
        })?;

        Ok(CheckoutSessionResponse {
            session_id: session.id,
            url,
        })
    }

    async fn get_checkout_status(
        &self,
        session_id: &str,
    ) -> Result<CheckoutStatusResponse, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/checkout/sessions/{}", self.base_url, session_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        let session = Self::read_session(response).await?;

        Ok(CheckoutStatusResponse {
            status: session.status,
            payment_status: session.payment_status,
            amount_total: session.amount_total,
            currency: session.currency,
            metadata: session.metadata,
        })
    }
}
