use chain::Log;

use crate::backend::Backend;
use crate::error::StoreError;
use crate::log::model::LogRecord;

#[derive(Clone)]
pub struct Store<B> {
    backend: B,
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn store_log(&self, log: &Log) -> Result<(), StoreError> {
        let record = LogRecord::try_from(log).inspect_err(|e| {
            tracing::error!("Failed to map log {log:?}: {e}");
        })?;

        self.backend.insert_log(&record).await?;
        tracing::debug!("Stored: {record:?}");
        Ok(())
    }
}
