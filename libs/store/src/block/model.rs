use sqlx::FromRow;

/// Row of the `blocks` table. `raw_data` holds the JSON block summary.
#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct BlockRecord {
    pub epoch: i64,
    pub hash: String,
    /// Short id of `hash`, stored as the two's complement of the `u64`.
    pub hash_id: i64,
    /// Whether this is the pivot block of its epoch.
    pub pivot: bool,
    pub raw_data: Vec<u8>,
    pub raw_data_len: i64,
}

impl BlockRecord {
    pub fn short_id(&self) -> u64 {
        self.hash_id as u64
    }
}

/// Supported ways to select a stored block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockFilter {
    /// `0x`-prefixed block hash.
    ByHash(String),
    ByEpoch { epoch: u64, pivot: bool },
}
