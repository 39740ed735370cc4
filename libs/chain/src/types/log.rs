use alloy::primitives::{Address, B256, Bytes};
use serde::{Deserialize, Serialize};

/// An event emitted by a contract.
///
/// Position fields are assigned by the node once the emitting transaction is
/// executed and stay `None` for logs of pending transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_hash: Option<B256>,
    pub epoch_number: Option<u64>,
    pub transaction_hash: Option<B256>,
    pub transaction_index: Option<u64>,
    /// Position of the log within the whole epoch.
    pub log_index: Option<u64>,
    /// Position of the log within its transaction.
    pub transaction_log_index: Option<u64>,
}
