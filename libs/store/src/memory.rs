use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend::{Backend, BlockLookup};
use crate::block::model::BlockRecord;
use crate::error::StoreError;
use crate::log::model::LogRecord;
use crate::transaction::model::TransactionRecord;

#[derive(Default)]
struct Tables {
    txs: Vec<TransactionRecord>,
    blocks: Vec<BlockRecord>,
    logs: Vec<LogRecord>,
}

/// Backend keeping rows in insertion order in memory. Clones share tables.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn transactions(&self) -> Vec<TransactionRecord> {
        self.tables.lock().await.txs.clone()
    }

    pub async fn blocks(&self) -> Vec<BlockRecord> {
        self.tables.lock().await.blocks.clone()
    }

    pub async fn logs(&self) -> Vec<LogRecord> {
        self.tables.lock().await.logs.clone()
    }
}

#[async_trait::async_trait]
impl Backend for MemoryBackend {
    async fn insert_transaction(&self, record: &TransactionRecord) -> Result<(), StoreError> {
        self.tables.lock().await.txs.push(record.clone());
        Ok(())
    }

    async fn find_transaction(
        &self,
        hash_id: i64,
        hash: &str,
    ) -> Result<Option<TransactionRecord>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.txs.iter().find(|tx| tx.hash_id == hash_id && tx.hash == hash).cloned())
    }

    async fn insert_block(&self, record: &BlockRecord) -> Result<(), StoreError> {
        self.tables.lock().await.blocks.push(record.clone());
        Ok(())
    }

    async fn find_block(&self, lookup: &BlockLookup) -> Result<Option<BlockRecord>, StoreError> {
        let tables = self.tables.lock().await;
        let found = tables.blocks.iter().find(|block| match lookup {
            BlockLookup::Hash { hash_id, hash } => block.hash_id == *hash_id && block.hash == *hash,
            BlockLookup::Epoch { epoch, pivot } => block.epoch == *epoch && block.pivot == *pivot,
        });

        Ok(found.cloned())
    }

    async fn insert_log(&self, record: &LogRecord) -> Result<(), StoreError> {
        self.tables.lock().await.logs.push(record.clone());
        Ok(())
    }
}
