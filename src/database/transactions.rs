use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::errors::Result;
use crate::models::payment::PaymentTransaction;

/// Persistence seam for payment transactions. The reconciliation path only
/// ever needs these three operations; records are never deleted.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, transaction: PaymentTransaction) -> Result<()>;

    async fn find_by_session(&self, session_id: &str) -> Result<Option<PaymentTransaction>>;

    async fn update_status(
        &self,
        session_id: &str,
        status: &str,
        payment_status: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<()>;
}

pub struct MongoTransactionStore {
    collection: Collection<PaymentTransaction>,
}

impl MongoTransactionStore {
    pub fn new(db: &Database) -> Self {
        MongoTransactionStore {
            collection: db.collection("payment_transactions"),
        }
    }
}

#[async_trait]
impl TransactionStore for MongoTransactionStore {
    async fn insert(&self, transaction: PaymentTransaction) -> Result<()> {
        self.collection.insert_one(transaction).await?;
        Ok(())
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<PaymentTransaction>> {
        Ok(self
            .collection
            .find_one(doc! { "session_id": session_id })
            .await?)
    }

    async fn update_status(
        &self,
        session_id: &str,
        status: &str,
        payment_status: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        self.collection
            .update_one(
                doc! { "session_id": session_id },
                doc! { "$set": {
                    "status": status,
                    "payment_status": payment_status,
                    "updated_at": updated_at.to_rfc3339(),
                }},
            )
            .await?;
        Ok(())
    }
}
