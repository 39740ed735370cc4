use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::types::transaction::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    pub hash: B256,
    pub parent_hash: B256,
    pub height: u64,
    pub miner: Address,
    pub deferred_state_root: B256,
    pub deferred_receipts_root: B256,
    pub deferred_logs_bloom_hash: B256,
    pub blame: u64,
    pub transactions_root: B256,
    /// `None` until the block is included in an epoch.
    pub epoch_number: Option<u64>,
    pub gas_limit: U256,
    pub gas_used: Option<U256>,
    pub timestamp: u64,
    pub difficulty: U256,
    pub pow_quality: Option<U256>,
    pub referee_hashes: Vec<B256>,
    pub adaptive: bool,
    pub nonce: U256,
    pub size: Option<u64>,
}

/// A block with its full transaction bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(flatten)]
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

/// A block header with only the hashes of its transactions, in block order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    #[serde(flatten)]
    pub header: BlockHeader,
    pub transactions: Vec<B256>,
}

impl Block {
    /// Drops the transaction bodies, keeping their hashes in order.
    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            header: self.header.clone(),
            transactions: self.transactions.iter().map(|tx| tx.hash).collect(),
        }
    }
}
