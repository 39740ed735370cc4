use sqlx::FromRow;

/// Row of the `txs` table.
#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct TransactionRecord {
    pub epoch: i64,
    pub hash: String,
    /// Short id of `hash`, stored as the two's complement of the `u64`.
    pub hash_id: i64,
    pub tx_raw_data: Vec<u8>,
    pub tx_raw_data_len: i64,
    pub receipt_raw_data: Vec<u8>,
    pub receipt_raw_data_len: i64,
}

impl TransactionRecord {
    pub fn short_id(&self) -> u64 {
        self.hash_id as u64
    }
}
