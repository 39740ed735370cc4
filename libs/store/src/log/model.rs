use sqlx::FromRow;

/// Row of the `logs` table.
///
/// Topics fill `topic0..topic3` from the left; slots past the log's topic
/// count are `None`.
#[derive(Clone, FromRow, PartialEq, Eq)]
pub struct LogRecord {
    pub epoch: i64,
    pub block_hash: String,
    pub contract_address: String,
    pub topic0: String,
    pub topic1: Option<String>,
    pub topic2: Option<String>,
    pub topic3: Option<String>,
    pub data: Vec<u8>,
    pub data_len: i64,
    pub tx_hash: String,
    pub tx_index: i64,
    pub tx_log_index: i64,
    pub log_index: i64,
}

impl LogRecord {
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.topic0.as_str()).chain(
            [&self.topic1, &self.topic2, &self.topic3].into_iter().flatten().map(String::as_str),
        )
    }
}
