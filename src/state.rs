use std::sync::Arc;

use mongodb::Database;

use crate::database::searches::SearchStore;
use crate::services::checkout_service::CheckoutService;
use crate::services::duffel_service::FlightProvider;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub flights: Arc<dyn FlightProvider>,
    pub searches: Arc<dyn SearchStore>,
    pub checkout: Arc<CheckoutService>,
}

impl AppState {
    pub fn new(
        db: Database,
        flights: Arc<dyn FlightProvider>,
        searches: Arc<dyn SearchStore>,
        checkout: Arc<CheckoutService>,
    ) -> Self {
        AppState {
            db,
            flights,
            searches,
            checkout,
        }
    }
}
