use chain::{Transaction, TransactionReceipt};

use crate::backend::Backend;
use crate::error::StoreError;
use crate::keys;
use crate::transaction::model::TransactionRecord;

#[derive(Clone)]
pub struct Store<B> {
    backend: B,
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn store_transaction(
        &self,
        tx: &Transaction,
        receipt: &TransactionReceipt,
    ) -> Result<(), StoreError> {
        let record = TransactionRecord::new(tx, receipt).inspect_err(|e| {
            tracing::error!("Failed to map transaction {}: {e}", tx.hash);
        })?;

        self.backend.insert_transaction(&record).await?;
        tracing::debug!("Stored: {record:?}");
        Ok(())
    }

    /// Loads the row of the transaction with the given `0x`-prefixed hash.
    pub async fn load_transaction(&self, hash: &str) -> Result<TransactionRecord, StoreError> {
        let hash_id = keys::short_id_column(hash)?;

        self.backend
            .find_transaction(hash_id, hash)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("transaction {hash}")))
    }
}
