use chain::{Block, BlockSummary};

use crate::backend::{Backend, BlockLookup};
use crate::block::model::{BlockFilter, BlockRecord};
use crate::error::StoreError;

#[derive(Clone)]
pub struct Store<B> {
    backend: B,
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn store_block(&self, block: &Block, pivot: bool) -> Result<(), StoreError> {
        let record = BlockRecord::new(block, pivot).inspect_err(|e| {
            tracing::error!("Failed to map block {}: {e}", block.header.hash);
        })?;

        self.backend.insert_block(&record).await?;
        tracing::debug!("Stored: {record:?}");
        Ok(())
    }

    /// Loads the summary of the first stored block matching `filter`.
    pub async fn load_block(&self, filter: &BlockFilter) -> Result<BlockSummary, StoreError> {
        let lookup = BlockLookup::try_from(filter)?;

        let record = self
            .backend
            .find_block(&lookup)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("block {filter:?}")))?;

        Ok(record.decode_summary()?)
    }
}
