use alloy::primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::types::log::Log;

/// A transaction as returned by the node, with its signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: B256,
    pub nonce: U256,
    /// Unset while the transaction is pending.
    pub block_hash: Option<B256>,
    pub transaction_index: Option<u64>,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub gas_price: U256,
    pub gas: U256,
    pub contract_created: Option<Address>,
    pub data: Bytes,
    pub storage_limit: U256,
    pub epoch_height: u64,
    pub chain_id: u64,
    pub status: Option<u64>,
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

/// Execution result of a transaction.
///
/// The receipt is the authoritative source for the epoch a transaction was
/// executed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    pub index: u64,
    pub block_hash: B256,
    pub epoch_number: Option<u64>,
    pub from: Address,
    pub to: Option<Address>,
    pub gas_used: U256,
    pub gas_fee: U256,
    pub contract_created: Option<Address>,
    pub logs: Vec<Log>,
    pub logs_bloom: Bytes,
    pub state_root: B256,
    pub outcome_status: u64,
    pub tx_exec_error_msg: Option<String>,
}
