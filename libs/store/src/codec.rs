use std::any::type_name;
use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::CorruptionError;

const NULL: &[u8] = b"null";

/// Encodes a value into a JSON blob.
///
/// Values serializing to JSON `null` (e.g. `None`) produce an empty blob.
pub fn encode<T>(value: &T) -> Result<Vec<u8>, CorruptionError>
where
    T: Serialize + Debug + ?Sized,
{
    let data = serde_json::to_vec(value).map_err(|source| {
        tracing::error!("Failed to marshal data to JSON, value = {value:?}: {source}");
        CorruptionError::Encode { type_name: type_name::<T>(), source }
    })?;

    if data == NULL {
        return Ok(Vec::new());
    }

    Ok(data)
}

/// Decodes a JSON blob written by [`encode`]. An empty blob reads as `null`.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, CorruptionError> {
    let data = if data.is_empty() { NULL } else { data };

    serde_json::from_slice(data).map_err(|source| {
        tracing::error!(
            "Failed to unmarshal data into {}, data = {}: {source}",
            type_name::<T>(),
            String::from_utf8_lossy(data)
        );
        CorruptionError::Decode { type_name: type_name::<T>(), source }
    })
}
