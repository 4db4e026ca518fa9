// config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub stripe_secret_key: String,
    pub duffel_access_token: String,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            mongo_url: env::var("MONGO_URL")
                .expect("MONGO_URL must be set"),
            db_name: env::var("DB_NAME")
                .expect("DB_NAME must be set"),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .expect("STRIPE_SECRET_KEY must be set"),
            duffel_access_token: env::var("DUFFEL_ACCESS_TOKEN")
                .expect("DUFFEL_ACCESS_TOKEN must be set"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a number"),
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }
}
