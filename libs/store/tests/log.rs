mod common;

#[cfg(test)]
mod tests {
    use alloy::primitives::B256;
    use eyre::Result;
    use store::error::CorruptionError;
    use store::log::{model::LogRecord, store::Store};
    use store::memory::MemoryBackend;

    use crate::common;

    #[test]
    fn test_topics_fill_left_to_right() -> Result<()> {
        for arity in 1..=4 {
            let record = LogRecord::try_from(&common::log(arity))?;

            let slots = [
                Some(&record.topic0),
                record.topic1.as_ref(),
                record.topic2.as_ref(),
                record.topic3.as_ref(),
            ];
            for (i, slot) in slots.into_iter().enumerate() {
                if i < arity {
                    assert_eq!(slot, Some(&common::hex(i as u8 + 1)), "arity {arity}, slot {i}");
                } else {
                    assert_eq!(slot, None, "arity {arity}, slot {i}");
                }
            }
            assert_eq!(record.topics().count(), arity);
        }

        Ok(())
    }

    #[test]
    fn test_single_topic() -> Result<()> {
        let record = LogRecord::try_from(&common::log(1))?;

        assert_eq!(record.topic0, common::hex(0x01));
        assert!(record.topic1.is_none());
        assert!(record.topic2.is_none());
        assert!(record.topic3.is_none());

        Ok(())
    }

    #[test]
    fn test_extra_topics_are_dropped() -> Result<()> {
        let mut log = common::log(4);
        log.topics.push(B256::repeat_byte(0x05));

        let record = LogRecord::try_from(&log)?;

        assert_eq!(record.topic3, Some(common::hex(0x04)));
        assert_eq!(record.topics().count(), 4);

        Ok(())
    }

    #[test]
    fn test_log_without_topics_is_corruption() {
        let err = LogRecord::try_from(&common::log(0)).unwrap_err();

        assert!(matches!(err, CorruptionError::NoTopics));
    }

    #[test]
    fn test_log_fields() -> Result<()> {
        let record = LogRecord::try_from(&common::log(2))?;

        assert_eq!(record.epoch, 100);
        assert_eq!(record.block_hash, common::hex(0xbb));
        assert_eq!(record.contract_address, "0x8ba1f109551bD432803012645Ac136ddd64DBA72");
        assert_eq!(record.data, vec![0x00, 0x01, 0x02]);
        assert_eq!(record.data_len, 3);
        assert_eq!(record.tx_hash, common::hex(0xaa));
        assert_eq!(record.tx_index, 3);
        assert_eq!(record.tx_log_index, 1);
        assert_eq!(record.log_index, 12);

        Ok(())
    }

    #[test]
    fn test_empty_data() -> Result<()> {
        let mut log = common::log(1);
        log.data = Default::default();

        let record = LogRecord::try_from(&log)?;

        assert!(record.data.is_empty());
        assert_eq!(record.data_len, 0);

        Ok(())
    }

    #[test]
    fn test_pending_log_is_corruption() {
        let mut log = common::log(1);
        log.transaction_log_index = None;

        let err = LogRecord::try_from(&log).unwrap_err();

        assert!(matches!(err, CorruptionError::MissingField("transaction_log_index")));
    }

    #[tokio::test]
    async fn test_store_log() -> Result<()> {
        let backend = MemoryBackend::new();
        let store = Store::new(backend.clone());

        store.store_log(&common::log(3)).await?;
        store.store_log(&common::log(1)).await?;

        let logs = backend.logs().await;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].topics().count(), 3);
        assert_eq!(logs[1].topics().count(), 1);

        assert!(store.store_log(&common::log(0)).await.unwrap_err().is_corruption());
        assert_eq!(backend.logs().await.len(), 2);

        Ok(())
    }
}
