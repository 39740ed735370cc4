use crate::backend::{Backend, BlockLookup};
use crate::block::model::BlockRecord;
use crate::client::Client;
use crate::error::StoreError;
use crate::log::model::LogRecord;
use crate::transaction::model::TransactionRecord;

#[async_trait::async_trait]
impl Backend for Client {
    // ---------------------------
    // TRANSACTIONS
    // ---------------------------

    async fn insert_transaction(&self, record: &TransactionRecord) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO txs (
                epoch, hash_id, hash,
                tx_raw_data, tx_raw_data_len, receipt_raw_data, receipt_raw_data_len
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#;

        sqlx::query(query)
            .bind(record.epoch)
            .bind(record.hash_id)
            .bind(&record.hash)
            .bind(&record.tx_raw_data)
            .bind(record.tx_raw_data_len)
            .bind(&record.receipt_raw_data)
            .bind(record.receipt_raw_data_len)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn find_transaction(
        &self,
        hash_id: i64,
        hash: &str,
    ) -> Result<Option<TransactionRecord>, StoreError> {
        let query = r#"
            SELECT
                epoch, hash_id, hash,
                tx_raw_data, tx_raw_data_len, receipt_raw_data, receipt_raw_data_len
            FROM txs
            WHERE hash_id = ? AND hash = ?
            ORDER BY id ASC
            LIMIT 1
            "#;
        let record = sqlx::query_as(query)
            .bind(hash_id)
            .bind(hash)
            .fetch_optional(self.pool())
            .await?;

        Ok(record)
    }

    // ---------------------------
    // BLOCKS
    // ---------------------------

    async fn insert_block(&self, record: &BlockRecord) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO blocks (epoch, hash_id, hash, pivot, raw_data, raw_data_len)
            VALUES (?, ?, ?, ?, ?, ?)
            "#;

        sqlx::query(query)
            .bind(record.epoch)
            .bind(record.hash_id)
            .bind(&record.hash)
            .bind(record.pivot)
            .bind(&record.raw_data)
            .bind(record.raw_data_len)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn find_block(&self, lookup: &BlockLookup) -> Result<Option<BlockRecord>, StoreError> {
        let record: Option<BlockRecord> = match lookup {
            BlockLookup::Hash { hash_id, hash } => {
                let query = r#"
                    SELECT epoch, hash_id, hash, pivot, raw_data, raw_data_len
                    FROM blocks
                    WHERE hash_id = ? AND hash = ?
                    ORDER BY id ASC
                    LIMIT 1
                    "#;
                sqlx::query_as(query)
                    .bind(*hash_id)
                    .bind(hash)
                    .fetch_optional(self.pool())
                    .await?
            }
            BlockLookup::Epoch { epoch, pivot } => {
                let query = r#"
                    SELECT epoch, hash_id, hash, pivot, raw_data, raw_data_len
                    FROM blocks
                    WHERE epoch = ? AND pivot = ?
                    ORDER BY id ASC
                    LIMIT 1
                    "#;
                sqlx::query_as(query)
                    .bind(*epoch)
                    .bind(*pivot)
                    .fetch_optional(self.pool())
                    .await?
            }
        };

        Ok(record)
    }

    // ---------------------------
    // LOGS
    // ---------------------------

    async fn insert_log(&self, record: &LogRecord) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO logs (
                epoch, block_hash, contract_address,
                topic0, topic1, topic2, topic3,
                data, data_len, tx_hash, tx_index, tx_log_index, log_index
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#;

        sqlx::query(query)
            .bind(record.epoch)
            .bind(&record.block_hash)
            .bind(&record.contract_address)
            .bind(&record.topic0)
            .bind(&record.topic1)
            .bind(&record.topic2)
            .bind(&record.topic3)
            .bind(&record.data)
            .bind(record.data_len)
            .bind(&record.tx_hash)
            .bind(record.tx_index)
            .bind(record.tx_log_index)
            .bind(record.log_index)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
