//! Error wording is stable and never echoes PIN digits.

use pinblock_core::{decode_pin, encode_pin_block, PinBlockError};

#[test]
fn pin_errors() {
    insta::assert_snapshot!(
        encode_pin_block("12a4", "123456789012").unwrap_err().to_string(),
        @"PIN must contain only ASCII digits"
    );
    insta::assert_snapshot!(
        encode_pin_block("123456789012345", "123456789012").unwrap_err().to_string(),
        @"PIN length must be between 1 and 14 digits, got 15"
    );
}

#[test]
fn pan_errors() {
    insta::assert_snapshot!(
        encode_pin_block("1234", "1234-5678").unwrap_err().to_string(),
        @"PAN must contain only ASCII digits"
    );
    insta::assert_snapshot!(
        encode_pin_block("1234", "12345678901").unwrap_err().to_string(),
        @"PAN must contain at least 12 digits, got 11"
    );
}

#[test]
fn block_errors() {
    insta::assert_snapshot!(
        decode_pin("3412B3", "123456789012").unwrap_err().to_string(),
        @"PIN block must be exactly 8 bytes, got 3"
    );
    insta::assert_snapshot!(
        decode_pin("3000000000000000", "000000000000").unwrap_err().to_string(),
        @"decoded PIN length mismatch: length nibble 0 is outside 1..=14"
    );
}

#[test]
fn messages_do_not_contain_pin() {
    let err = encode_pin_block("98765", "12345").unwrap_err();
    assert!(matches!(err, PinBlockError::InvalidPanLength { .. }));
    assert!(!err.to_string().contains("98765"));
}
