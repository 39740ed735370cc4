use chain::{Transaction, TransactionReceipt};

use crate::error::CorruptionError;
use crate::transaction::model::TransactionRecord;
use crate::{codec, keys, utils};

impl TransactionRecord {
    /// Maps an executed transaction and its receipt to a row.
    pub fn new(tx: &Transaction, receipt: &TransactionReceipt) -> Result<Self, CorruptionError> {
        // a transaction only has an epoch once executed
        let epoch = receipt.epoch_number.ok_or(CorruptionError::MissingField("epoch_number"))?;
        let hash = utils::bytes_to_hex(tx.hash.as_slice());
        let tx_raw_data = codec::encode(tx)?;
        let receipt_raw_data = codec::encode(receipt)?;

        Ok(Self {
            epoch: epoch as i64,
            hash_id: keys::short_id_column(&hash)?,
            hash,
            tx_raw_data_len: tx_raw_data.len() as i64,
            tx_raw_data,
            receipt_raw_data_len: receipt_raw_data.len() as i64,
            receipt_raw_data,
        })
    }

    pub fn decode_transaction(&self) -> Result<Transaction, CorruptionError> {
        codec::decode(&self.tx_raw_data)
    }

    pub fn decode_receipt(&self) -> Result<TransactionReceipt, CorruptionError> {
        codec::decode(&self.receipt_raw_data)
    }
}
