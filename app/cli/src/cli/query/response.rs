use serde::{Serialize, ser::Error, ser::SerializeStruct};
use store::transaction::model::TransactionRecord;

// Tuple wrapper for TransactionRecord
pub struct TransactionResponse(pub TransactionRecord);

impl Serialize for TransactionResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let t = &self.0;
        let transaction = t.decode_transaction().map_err(S::Error::custom)?;
        let receipt = t.decode_receipt().map_err(S::Error::custom)?;

        let mut state = serializer.serialize_struct("Transaction", 5)?;
        state.serialize_field("epoch", &t.epoch)?;
        state.serialize_field("hash", &t.hash)?;
        state.serialize_field("hash_id", &format!("{:#018x}", t.short_id()))?;
        state.serialize_field("transaction", &transaction)?;
        state.serialize_field("receipt", &receipt)?;
        state.end()
    }
}
