use std::fmt::{Debug, Formatter, Result};

use crate::{log::model::LogRecord, utils};

impl Debug for LogRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("LogRecord")
            .field("epoch", &self.epoch)
            .field("block_hash", &self.block_hash)
            .field("contract_address", &self.contract_address)
            .field("topics", &self.topics().collect::<Vec<_>>())
            .field("data", &utils::bytes_to_hex(&self.data))
            .field("tx_hash", &self.tx_hash)
            .field("tx_index", &self.tx_index)
            .field("tx_log_index", &self.tx_log_index)
            .field("log_index", &self.log_index)
            .finish()
    }
}
