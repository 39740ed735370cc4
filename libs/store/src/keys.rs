use crate::error::CorruptionError;

/// Derives the short id of a `0x`-prefixed hash string.
///
/// The short id is the first 8 bytes of the hash, i.e. the 16 hex digits
/// right after the 2-character prefix, read as a big-endian `u64`. It is
/// only an index companion: distinct hashes may share a short id, so lookups
/// always pair it with the full hash.
pub fn short_id(hash: &str) -> Result<u64, CorruptionError> {
    let Some(digits) = hash.get(2..18) else {
        tracing::error!(hash, "Failed to convert hash to short id: too short");
        return Err(CorruptionError::HashTooShort(hash.to_string()));
    };

    // from_str_radix tolerates a leading sign
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        tracing::error!(hash, "Failed to convert hash to short id: invalid hex digits");
        return Err(CorruptionError::InvalidHash(hash.to_string()));
    }

    u64::from_str_radix(digits, 16).map_err(|_| CorruptionError::InvalidHash(hash.to_string()))
}

/// Short id as stored in an `INTEGER` column.
pub(crate) fn short_id_column(hash: &str) -> Result<i64, CorruptionError> {
    short_id(hash).map(|id| id as i64)
}
