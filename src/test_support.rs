//! Shared fakes for the outbound seams: both provider clients and the
//! transaction store, plus canned requests. Test-only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::database::searches::SearchStore;
use crate::database::transactions::TransactionStore;
use crate::errors::{Result, UpstreamError};
use crate::models::flight::{FlightSearch, FlightSearchRequest};
use crate::models::payment::{PaymentRequest, PaymentTransaction};
use crate::services::duffel_service::FlightProvider;
use crate::services::stripe_service::{
    CheckoutSessionRequest, CheckoutSessionResponse, CheckoutStatusResponse, PaymentProvider,
};

pub fn payment_request() -> PaymentRequest {
    PaymentRequest {
        flight_offer_id: "off_123".to_string(),
        amount: 420.50,
        currency: "USD".to_string(),
        origin_url: "https://trotair.example".to_string(),
        metadata: HashMap::new(),
    }
}

pub enum FakeOutcome {
    Ok(Value),
    Timeout,
    Status(u16, String),
}

/// Flight provider that replays a fixed outcome and counts calls, so tests
/// can assert which paths never reach the upstream.
pub struct FakeFlightProvider {
    outcome: FakeOutcome,
    calls: AtomicUsize,
}

impl FakeFlightProvider {
    pub fn ok(value: Value) -> Self {
        Self::with_outcome(FakeOutcome::Ok(value))
    }

    pub fn timeout() -> Self {
        Self::with_outcome(FakeOutcome::Timeout)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::with_outcome(FakeOutcome::Status(status, body.to_string()))
    }

    fn with_outcome(outcome: FakeOutcome) -> Self {
        FakeFlightProvider {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn produce(&self) -> std::result::Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            FakeOutcome::Ok(value) => Ok(value.clone()),
            FakeOutcome::Timeout => Err(UpstreamError::Timeout),
            FakeOutcome::Status(status, body) => Err(UpstreamError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[async_trait]
impl FlightProvider for FakeFlightProvider {
    async fn place_suggestions(
        &self,
        _query: &str,
        _types: &str,
    ) -> std::result::Result<Value, UpstreamError> {
        self.produce()
    }

    async fn search_offers(
        &self,
        _request: &FlightSearchRequest,
    ) -> std::result::Result<Value, UpstreamError> {
        self.produce()
    }

    async fn get_offer(&self, _offer_id: &str) -> std::result::Result<Value, UpstreamError> {
        self.produce()
    }
}

/// Payment provider remembering the last create request and serving
/// configurable per-session status pairs.
pub struct FakePaymentProvider {
    session_id: String,
    fail_create: bool,
    statuses: Mutex<HashMap<String, (String, String)>>,
    last_request: Mutex<Option<CheckoutSessionRequest>>,
}

impl FakePaymentProvider {
    pub fn with_session_id(session_id: &str) -> Self {
        FakePaymentProvider {
            session_id: session_id.to_string(),
            fail_create: false,
            statuses: Mutex::new(HashMap::new()),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        let mut provider = Self::with_session_id("cs_never");
        provider.fail_create = true;
        provider
    }

    pub fn set_status(&self, session_id: &str, status: &str, payment_status: &str) {
        self.statuses.lock().unwrap().insert(
            session_id.to_string(),
            (status.to_string(), payment_status.to_string()),
        );
    }

    pub fn last_request(&self) -> Option<CheckoutSessionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProvider for FakePaymentProvider {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> std::result::Result<CheckoutSessionResponse, UpstreamError> {
        if self.fail_create {
            return Err(UpstreamError::Status {
                status: 502,
                body: "provider rejected the session".to_string(),
            });
        }

        *self.last_request.lock().unwrap() = Some(request.clone());
        self.set_status(&self.session_id, "open", "unpaid");

        Ok(CheckoutSessionResponse {
            session_id: self.session_id.clone(),
            url: format!("https://checkout.stripe.example/pay/{}", self.session_id),
        })
    }

    async fn get_checkout_status(
        &self,
        session_id: &str,
    ) -> std::result::Result<CheckoutStatusResponse, UpstreamError> {
        let statuses = self.statuses.lock().unwrap();
        let (status, payment_status) = statuses.get(session_id).cloned().ok_or_else(|| {
            UpstreamError::Status {
                status: 404,
                body: format!("No such checkout session: {}", session_id),
            }
        })?;

        Ok(CheckoutStatusResponse {
            status,
            payment_status,
            amount_total: Some(42050),
            currency: Some("usd".to_string()),
            metadata: HashMap::new(),
        })
    }
}

/// In-memory stand-in for the Mongo-backed search-record store.
#[derive(Default)]
pub struct MemorySearchStore {
    records: Mutex<Vec<FlightSearch>>,
}

impl MemorySearchStore {
    pub fn records(&self) -> Vec<FlightSearch> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchStore for MemorySearchStore {
    async fn insert(&self, search: FlightSearch) -> Result<()> {
        self.records.lock().unwrap().push(search);
        Ok(())
    }
}

/// In-memory stand-in for the Mongo-backed transaction store.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, PaymentTransaction>>,
}

impl MemoryStore {
    pub fn get(&self, session_id: &str) -> Option<PaymentTransaction> {
        self.records.lock().unwrap().get(session_id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert(&self, transaction: PaymentTransaction) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert(transaction.session_id.clone(), transaction);
        Ok(())
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<PaymentTransaction>> {
        Ok(self.get(session_id))
    }

    async fn update_status(
        &self,
        session_id: &str,
        status: &str,
        payment_status: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        if let Some(record) = self.records.lock().unwrap().get_mut(session_id) {
            record.status = status.to_string();
            record.payment_status = payment_status.to_string();
            record.updated_at = Some(updated_at);
        }
        Ok(())
    }
}
