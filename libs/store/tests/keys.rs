use store::error::CorruptionError;
use store::keys::short_id;

#[test]
fn test_short_id_reads_first_eight_bytes() {
    let hash = "0x1234567890abcdef00112233445566778899aabbccddeeff0011223344556677";

    assert_eq!(short_id(hash).unwrap(), 0x1234_5678_90ab_cdef);
}

#[test]
fn test_short_id_is_deterministic() {
    let hash = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    assert_eq!(short_id(hash).unwrap(), short_id(hash).unwrap());
    assert_eq!(short_id(hash).unwrap(), u64::MAX / 3 * 2);
}

#[test]
fn test_short_id_ignores_trailing_digits() {
    let a = "0xffffffffffffffff0000000000000000000000000000000000000000000000aa";
    let b = "0xffffffffffffffff1111111111111111111111111111111111111111111111bb";

    // collisions are expected, lookups pair the id with the full hash
    assert_eq!(short_id(a).unwrap(), short_id(b).unwrap());
}

#[test]
fn test_short_id_accepts_minimal_length() {
    assert_eq!(short_id("0x0000000000000001").unwrap(), 1);
    assert_eq!(short_id("0xABCDEF0123456789").unwrap(), 0xabcd_ef01_2345_6789);
}

#[test]
fn test_short_id_rejects_short_hash() {
    for hash in ["", "0x", "0x123456789abcdef"] {
        let err = short_id(hash).unwrap_err();
        assert!(matches!(err, CorruptionError::HashTooShort(h) if h == hash));
    }
}

#[test]
fn test_short_id_rejects_non_hex_digits() {
    for hash in ["0x123456789abcdefg", "0x+23456789abcdef0", "0x 23456789abcdef0"] {
        assert!(matches!(short_id(hash), Err(CorruptionError::InvalidHash(_))));
    }
}

#[test]
fn test_short_id_rejects_multibyte_boundary() {
    // byte 18 falls inside the two-byte `é`
    let hash = "0x123456789abcdefé";

    assert!(short_id(hash).is_err());
}
