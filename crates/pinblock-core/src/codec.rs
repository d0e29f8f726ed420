//! Nibble/byte packing and the hexadecimal wire form of a PIN block.
//!
//! Byte `k` of a block holds nibble `2k` in its high four bits and nibble
//! `2k + 1` in its low four bits. [`pack`] and [`unpack`] are the only
//! places that order is collapsed into or recovered from bytes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use data_encoding::{HEXUPPER, HEXUPPER_PERMISSIVE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::error::PinBlockError;
use crate::nibble::{NibbleField, MAX_NIBBLE, NIBBLE_COUNT};

/// Size of a PIN block in bytes.
pub const PIN_BLOCK_LEN: usize = 8;

/// Length of the canonical hex form.
pub const PIN_BLOCK_HEX_LEN: usize = 16;

// ---------------------------------------------------------------------------
// PinBlock
// ---------------------------------------------------------------------------

/// An encoded 8-byte PIN block.
///
/// Holds no reference to the PIN or PAN it was built from. `Display`,
/// `Debug` and `serde` all use the uppercase hex form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinBlock([u8; PIN_BLOCK_LEN]);

impl PinBlock {
    /// Wrap raw block bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; PIN_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw block bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PIN_BLOCK_LEN] {
        &self.0
    }

    /// Canonical 16-character uppercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// Parse a block from hex text (either case; odd length is left-padded
    /// with `0`).
    ///
    /// # Errors
    ///
    /// - [`PinBlockError::InvalidHexInput`] on non-hex characters
    /// - [`PinBlockError::InvalidBlockLength`] unless the text decodes to
    ///   exactly [`PIN_BLOCK_LEN`] bytes
    pub fn from_hex(text: &str) -> Result<Self, PinBlockError> {
        let bytes = from_hex(text)?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for PinBlock {
    type Error = PinBlockError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PIN_BLOCK_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| PinBlockError::InvalidBlockLength {
                length: bytes.len(),
            })
    }
}

impl FromStr for PinBlock {
    type Err = PinBlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for PinBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PinBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PinBlock({})", self.to_hex())
    }
}

impl Serialize for PinBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PinBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Packing
// ---------------------------------------------------------------------------

/// XOR the PIN and PAN fields and pack the result into a block.
#[must_use]
pub fn pack(pin_field: &NibbleField, pan_field: &NibbleField) -> PinBlock {
    let combined = pin_field.xor(pan_field);
    let mut bytes = [0u8; PIN_BLOCK_LEN];
    for (byte, pair) in bytes
        .iter_mut()
        .zip(combined.as_nibbles().chunks_exact(2))
    {
        // Both values are nibbles, so the shift cannot lose bits.
        #[allow(clippy::arithmetic_side_effects)]
        let high = pair[0] << 4;
        *byte = high | pair[1];
    }
    PinBlock(bytes)
}

/// Recover the PIN field from block bytes and the PAN field.
///
/// # Errors
///
/// Returns [`PinBlockError::InvalidBlockLength`] unless `bytes` is exactly
/// [`PIN_BLOCK_LEN`] long.
pub fn unpack(bytes: &[u8], pan_field: &NibbleField) -> Result<NibbleField, PinBlockError> {
    let block = PinBlock::try_from(bytes)?;
    Ok(unpack_block(&block, pan_field))
}

/// Infallible form of [`unpack`] for an already-sized block.
#[must_use]
pub fn unpack_block(block: &PinBlock, pan_field: &NibbleField) -> NibbleField {
    let mut nibbles = Zeroizing::new([0u8; NIBBLE_COUNT]);
    for (pair, (byte, pan_pair)) in nibbles.chunks_exact_mut(2).zip(
        block
            .as_bytes()
            .iter()
            .zip(pan_field.as_nibbles().chunks_exact(2)),
    ) {
        #[allow(clippy::arithmetic_side_effects)]
        let high = byte >> 4;
        pair[0] = high ^ pan_pair[0];
        pair[1] = (byte & MAX_NIBBLE) ^ pan_pair[1];
    }
    NibbleField::from_masked(*nibbles)
}

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// Encode bytes as uppercase hex with no separators or prefix.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    HEXUPPER.encode(bytes)
}

/// Decode hex text of either case. Odd-length input is left-padded with a
/// single `0` first.
///
/// # Errors
///
/// Returns [`PinBlockError::InvalidHexInput`] on any non-hex character.
pub fn from_hex(text: &str) -> Result<Vec<u8>, PinBlockError> {
    #[allow(clippy::arithmetic_side_effects)]
    let odd = text.len() % 2 != 0;
    let padded: Cow<'_, str> = if odd {
        Cow::Owned(format!("0{text}"))
    } else {
        Cow::Borrowed(text)
    };
    HEXUPPER_PERMISSIVE
        .decode(padded.as_bytes())
        .map_err(|e| PinBlockError::InvalidHexInput(e.to_string()))
}
