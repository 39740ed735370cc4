use alloy::{hex, primitives::Address};

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Canonical text form of a contract address (EIP-55 mixed case).
pub fn normalize_address(address: &Address) -> String {
    address.to_checksum(None)
}
