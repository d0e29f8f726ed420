//! `pinblock-core` — ISO 9564 Format 3 (ISO-3) PIN block codec.
//!
//! Encodes a decimal PIN against a Primary Account Number into an 8-byte
//! PIN block and decodes it back. This is a data-layout transform, not a
//! cipher: no keys, no I/O beyond the optional policy file, no async.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod nibble;

pub mod pan_field;
pub mod pin_field;

pub mod codec;

pub mod policy;

pub mod service;

pub use codec::{from_hex, pack, to_hex, unpack, PinBlock, PIN_BLOCK_HEX_LEN, PIN_BLOCK_LEN};
pub use error::PinBlockError;
pub use nibble::{NibbleField, NIBBLE_COUNT};
pub use pan_field::{build_pan_field, MIN_PAN_LENGTH};
pub use pin_field::{build_pin_field, FORMAT_CODE, MAX_PIN_LENGTH, MIN_PIN_LENGTH};
pub use policy::PinPolicy;
pub use service::{decode_pin, encode_pin_block, PinBlockService};
