use std::fmt::{Debug, Formatter, Result};

use crate::transaction::model::TransactionRecord;

impl Debug for TransactionRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("TransactionRecord")
            .field("epoch", &self.epoch)
            .field("hash", &self.hash)
            .field("hash_id", &format_args!("{:#018x}", self.short_id()))
            .field("tx_raw_data_len", &self.tx_raw_data_len)
            .field("receipt_raw_data_len", &self.receipt_raw_data_len)
            .finish()
    }
}
