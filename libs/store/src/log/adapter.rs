use chain::Log;

use crate::error::CorruptionError;
use crate::log::model::LogRecord;
use crate::utils;

impl TryFrom<&Log> for LogRecord {
    type Error = CorruptionError;

    fn try_from(log: &Log) -> Result<Self, Self::Error> {
        let mut topics = log.topics.iter().map(|topic| utils::bytes_to_hex(topic.as_slice()));

        Ok(Self {
            epoch: log.epoch_number.ok_or(CorruptionError::MissingField("epoch_number"))? as i64,
            block_hash: utils::bytes_to_hex(
                log.block_hash.ok_or(CorruptionError::MissingField("block_hash"))?.as_slice(),
            ),
            contract_address: utils::normalize_address(&log.address),
            topic0: topics.next().ok_or(CorruptionError::NoTopics)?,
            topic1: topics.next(),
            topic2: topics.next(),
            topic3: topics.next(),
            data: log.data.to_vec(),
            data_len: log.data.len() as i64,
            tx_hash: utils::bytes_to_hex(
                log.transaction_hash
                    .ok_or(CorruptionError::MissingField("transaction_hash"))?
                    .as_slice(),
            ),
            tx_index: log
                .transaction_index
                .ok_or(CorruptionError::MissingField("transaction_index"))?
                as i64,
            tx_log_index: log
                .transaction_log_index
                .ok_or(CorruptionError::MissingField("transaction_log_index"))?
                as i64,
            log_index: log.log_index.ok_or(CorruptionError::MissingField("log_index"))? as i64,
        })
    }
}
