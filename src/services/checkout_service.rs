// services/checkout_service.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::database::transactions::TransactionStore;
use crate::errors::{AppError, Result};
use crate::models::payment::{PaymentRequest, PaymentTransaction};
use crate::services::stripe_service::{
    CheckoutSessionRequest, CheckoutSessionResponse, CheckoutStatusResponse, PaymentProvider,
};

/// Fixed metadata tag identifying sessions created by this service.
pub const SOURCE_TAG: &str = "trotair_flight_booking";

// The provider substitutes {CHECKOUT_SESSION_ID} at redirect time; it must
// reach the provider verbatim.
const SUCCESS_SUFFIX: &str = "/booking-success?session_id={CHECKOUT_SESSION_ID}";
const CANCEL_SUFFIX: &str = "/booking-cancelled";

/// Orchestrates the checkout-session lifecycle: creates sessions with the
/// payment provider, persists the initial transaction record, and reconciles
/// stored state against the provider on status checks. The provider is always
/// the source of truth; local records only mirror it.
pub struct CheckoutService {
    provider: Arc<dyn PaymentProvider>,
    store: Arc<dyn TransactionStore>,
}

impl CheckoutService {
    pub fn new(provider: Arc<dyn PaymentProvider>, store: Arc<dyn TransactionStore>) -> Self {
        CheckoutService { provider, store }
    }

    pub async fn create_session(&self, request: PaymentRequest) -> Result<CheckoutSessionResponse> {
        let success_url = format!("{}{}", request.origin_url, SUCCESS_SUFFIX);
        let cancel_url = format!("{}{}", request.origin_url, CANCEL_SUFFIX);

        // Fixed keys win over caller-supplied collisions.
        let mut metadata = request.metadata.clone();
        metadata.insert("flight_offer_id".to_string(), request.flight_offer_id.clone());
        metadata.insert("source".to_string(), SOURCE_TAG.to_string());

        let checkout_request = CheckoutSessionRequest {
            amount: request.amount,
            currency: request.currency.clone(),
            success_url,
            cancel_url,
            metadata: metadata.clone(),
        };

        let session = self
            .provider
            .create_checkout_session(&checkout_request)
            .await
            .map_err(|e| {
                error!("Payment session creation error: {}", e);
                AppError::payment(e.to_string())
            })?;

        let transaction = PaymentTransaction {
            id: None,
            session_id: session.session_id.clone(),
            flight_offer_id: request.flight_offer_id,
            amount: request.amount,
            currency: request.currency,
            metadata,
            status: "initiated".to_string(),
            payment_status: "pending".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.store.insert(transaction).await?;

        info!("Checkout session {} created", session.session_id);
        Ok(session)
    }

    pub async fn get_status(&self, session_id: &str) -> Result<CheckoutStatusResponse> {
        let checkout_status = self
            .provider
            .get_checkout_status(session_id)
            .await
            .map_err(|e| {
                error!("Payment status check error for {}: {}", session_id, e);
                AppError::payment(e.to_string())
            })?;

        match self.store.find_by_session(session_id).await? {
            Some(_) => {
                self.store
                    .update_status(
                        session_id,
                        &checkout_status.status,
                        &checkout_status.payment_status,
                        Utc::now(),
                    )
                    .await?;
            }
            None => {
                // Sessions created out of band have no local record; the
                // reconciliation is deliberately a no-op rather than a create.
                warn!("No payment transaction on record for session {}", session_id);
            }
        }

        // Always the provider's data, never the local copy.
        Ok(checkout_status)
    }
}
