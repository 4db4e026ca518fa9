use mongodb::{Client, Database};

use crate::config::AppConfig;

pub async fn connect(config: &AppConfig) -> Database {
    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&config.db_name);

    match db.list_collection_names().await {
        Ok(collections) => {
            tracing::info!("✅ Connected to database: {}", config.db_name);
            tracing::info!("📂 Collections found: {:?}", collections);
        }
        Err(e) => {
            tracing::warn!(
                "Database '{}' may not exist yet or is inaccessible: {}",
                config.db_name,
                e
            );
        }
    }

    db
}
