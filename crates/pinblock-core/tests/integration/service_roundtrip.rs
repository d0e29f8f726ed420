//! Encode → decode through the public service API.

use rand::rngs::OsRng;
use pinblock_core::{decode_pin, encode_pin_block, PinBlock, PinBlockError, PinBlockService, PinPolicy};

const PAN: &str = "5413330089010012";

/// A block encoded with OS randomness decodes with the same PAN.
#[test]
fn encode_then_decode_with_os_rng() {
    let hex = encode_pin_block("246810", PAN).expect("encode");
    assert_eq!(hex.len(), 16);
    assert_eq!(decode_pin(&hex, PAN).expect("decode"), "246810");
}

/// Repeated encodes of the same input produce varying blocks.
#[test]
fn repeated_encodes_vary() {
    // 10 random padding nibbles per block: 20 identical draws is ~2^-760.
    let blocks: std::collections::HashSet<String> = (0..20)
        .map(|_| encode_pin_block("1234", PAN).unwrap())
        .collect();
    assert!(blocks.len() > 1, "padding never changed");
    for block in &blocks {
        assert_eq!(decode_pin(block, PAN).unwrap(), "1234");
    }
}

/// A different PAN with the same rightmost twelve digits decodes the block.
#[test]
fn decode_with_equivalent_pan() {
    let hex = encode_pin_block("9999", PAN).unwrap();
    let equivalent = format!("000{}", &PAN[4..]);
    assert_eq!(decode_pin(&hex, &equivalent).unwrap(), "9999");
}

/// Decoding with an unrelated PAN never yields a false error type.
#[test]
fn decode_with_wrong_pan_is_mismatch_or_other_pin() {
    let hex = encode_pin_block("1234", PAN).unwrap();
    match decode_pin(&hex, "999999999999") {
        Ok(pin) => assert!(pin.bytes().all(|b| b.is_ascii_digit())),
        Err(e) => assert!(matches!(e, PinBlockError::DecodeLengthMismatch(_))),
    }
}

/// The interactive policy accepts 4–12 digits and rejects the rest.
#[test]
fn interactive_policy_bounds() {
    let service = PinBlockService::new(PinPolicy::interactive());
    for len in 1..=14usize {
        let pin = "1".repeat(len);
        let result = service.encode(&pin, PAN, &mut OsRng);
        if (4..=12).contains(&len) {
            let hex = result.unwrap();
            assert_eq!(service.decode(&hex, PAN).unwrap(), pin);
        } else {
            assert!(
                matches!(result, Err(PinBlockError::InvalidPinLength { .. })),
                "length {len} should be rejected"
            );
        }
    }
}

/// `PinBlock` parsing and `decode_block` agree with the string API.
#[test]
fn parsed_block_decodes() {
    let service = PinBlockService::default();
    let hex = service.encode("31337", PAN, &mut OsRng).unwrap();
    let block: PinBlock = hex.parse().unwrap();
    assert_eq!(block.to_string(), hex);
    assert_eq!(service.decode_block(&block, PAN).unwrap(), "31337");
}

/// Fifteen hex characters are left-padded into a full 8-byte block.
#[test]
fn odd_length_hex_is_left_padded() {
    // "3412B36543210987" with its leading '3' dropped; the padded block has
    // format nibble 0 but still declares the same 4 digits.
    assert_eq!(decode_pin("412B36543210987", "876543210987").unwrap(), "1234");
}
