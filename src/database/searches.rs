use async_trait::async_trait;
use mongodb::{Collection, Database};

use crate::errors::Result;
use crate::models::flight::FlightSearch;

/// Persistence seam for completed offer-request records. Append-only: one
/// record per successful search, never updated.
#[async_trait]
pub trait SearchStore: Send + Sync {
    async fn insert(&self, search: FlightSearch) -> Result<()>;
}

pub struct MongoSearchStore {
    collection: Collection<FlightSearch>,
}

impl MongoSearchStore {
    pub fn new(db: &Database) -> Self {
        MongoSearchStore {
            collection: db.collection("flight_searches"),
        }
    }
}

#[async_trait]
impl SearchStore for MongoSearchStore {
    async fn insert(&self, search: FlightSearch) -> Result<()> {
        self.collection.insert_one(search).await?;
        Ok(())
    }
}
