use crate::block::model::BlockRecord;
use crate::error::StoreError;
use crate::log::model::LogRecord;
use crate::transaction::model::TransactionRecord;

/// Resolved block lookup, with the short id already derived for hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLookup {
    Hash { hash_id: i64, hash: String },
    Epoch { epoch: i64, pivot: bool },
}

/// The relational store as seen by the record stores.
///
/// Point queries return the first matching row in insertion order.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn insert_transaction(&self, record: &TransactionRecord) -> Result<(), StoreError>;

    async fn find_transaction(
        &self,
        hash_id: i64,
        hash: &str,
    ) -> Result<Option<TransactionRecord>, StoreError>;

    async fn insert_block(&self, record: &BlockRecord) -> Result<(), StoreError>;

    async fn find_block(&self, lookup: &BlockLookup) -> Result<Option<BlockRecord>, StoreError>;

    async fn insert_log(&self, record: &LogRecord) -> Result<(), StoreError>;
}
