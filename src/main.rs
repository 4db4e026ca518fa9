use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::{http::Method, response::Json, routing::get, Router};
use mongodb::Database;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

mod config;
mod database;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use config::AppConfig;
use database::searches::MongoSearchStore;
use database::transactions::MongoTransactionStore;
use services::checkout_service::CheckoutService;
use services::duffel_service::{DuffelService, FlightProvider};
use services::stripe_service::{PaymentProvider, StripeService};
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    let db = database::connection::connect(&config).await;
    let app_state = initialize_app_state(db, &config);

    let app = build_router(app_state);
    start_server(app, &config).await;
}

fn initialize_app_state(db: Database, config: &AppConfig) -> AppState {
    let flights: Arc<dyn FlightProvider> =
        Arc::new(DuffelService::new(config.duffel_access_token.clone()));
    let stripe: Arc<dyn PaymentProvider> =
        Arc::new(StripeService::new(config.stripe_secret_key.clone()));
    let searches = Arc::new(MongoSearchStore::new(&db));
    let store = Arc::new(MongoTransactionStore::new(&db));
    let checkout = Arc::new(CheckoutService::new(stripe, store));

    tracing::info!("✅ Duffel and Stripe clients initialized");

    AppState::new(db, flights, searches, checkout)
}

fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/api/", get(root_handler))
        .route("/api/health", get(api_health_check))
        .nest("/api", routes::status::routes())
        .nest("/api", routes::flights::routes())
        .nest("/api/payments", routes::payments::routes())
        .layer(cors)
        .with_state(app_state)
}

async fn start_server(app: Router, config: &AppConfig) {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");

    tracing::info!("🚀 Server starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            axum::serve(listener, app).await.expect("Server error");
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_health_check(State(state): State<AppState>) -> Json<Value> {
    use mongodb::bson::doc;

    let db_status = match state.db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(json!({
        "status": "healthy",
        "database": db_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
