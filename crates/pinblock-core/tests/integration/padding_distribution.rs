//! Padding nibbles drawn from `OsRng` cover 0–15 roughly uniformly.
//!
//! Against an all-zero account field the block equals the PIN field, so the
//! padding can be read straight off the encoded bytes. A 1-digit PIN leaves
//! 13 padding nibbles per block; 2000 blocks give 26,000 samples, about 1625
//! per value. The bounds below sit more than 8 standard deviations out, so
//! only a degenerate source trips them.

use pinblock_core::{encode_pin_block, from_hex};

const ZERO_PAN: &str = "000000000000";

#[test]
fn padding_nibbles_are_roughly_uniform() {
    let mut counts = [0u32; 16];
    for _ in 0..2000 {
        let hex = encode_pin_block("5", ZERO_PAN).unwrap();
        let bytes = from_hex(&hex).unwrap();
        let nibbles: Vec<u8> = bytes.iter().flat_map(|b| [b >> 4, b & 0x0F]).collect();
        assert_eq!(&nibbles[..3], &[3, 1, 5]);
        for &n in &nibbles[3..] {
            counts[usize::from(n)] += 1;
        }
    }

    for (value, &count) in counts.iter().enumerate() {
        assert!(
            (1300..=1950).contains(&count),
            "nibble {value} drawn {count} times out of 26000"
        );
    }
}
