use thiserror::Error;

/// Malformed data at the mapping boundary.
///
/// Seeing one of these means an upstream component handed over data that
/// cannot be stored or read back faithfully. Callers are expected to treat it
/// as fatal rather than retry.
#[derive(Error, Debug)]
pub enum CorruptionError {
    #[error("hash `{0}` is too short to derive a short id")]
    HashTooShort(String),

    #[error("hash `{0}` does not start with 16 hex digits after its prefix")]
    InvalidHash(String),

    #[error("failed to encode {type_name} to JSON: {source}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode JSON into {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("log has no topics")]
    NoTopics,
}

/// Errors returned by the record stores.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Corruption(#[from] CorruptionError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether the error reports corrupted data rather than a store failure.
    pub fn is_corruption(&self) -> bool {
        matches!(self, StoreError::Corruption(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
