//! PIN field construction for ISO 9564 Format 3.
//!
//! Layout: `[3, L, P1 .. PL, R .. R]` where `L` is the digit count and
//! every `R` is an independent uniform nibble from the caller's
//! randomness source.

use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::PinBlockError;
use crate::nibble::{NibbleField, MAX_NIBBLE, NIBBLE_COUNT};

/// Format code carried in the first nibble.
pub const FORMAT_CODE: u8 = 3;

/// Shortest PIN the format can carry.
pub const MIN_PIN_LENGTH: usize = 1;

/// Longest PIN the format can carry (16 nibbles minus the 2-nibble header).
pub const MAX_PIN_LENGTH: usize = 14;

/// Nibbles taken by the format code and length.
pub(crate) const HEADER_NIBBLES: usize = 2;

/// Nibbles available for digits and padding.
const PAYLOAD_NIBBLES: usize = 14;

/// Build the 16-nibble PIN field.
///
/// Padding comes from `rng`. Each padding byte contributes its low four
/// bits, which keeps the draw uniform over `0..=15`.
///
/// # Errors
///
/// - [`PinBlockError::InvalidPinFormat`] if `pin` has a non-digit character
/// - [`PinBlockError::InvalidPinLength`] if `pin` is empty or longer than
///   [`MAX_PIN_LENGTH`]
/// - [`PinBlockError::Randomness`] if `rng` cannot supply padding
pub fn build_pin_field<R: RngCore + ?Sized>(
    pin: &str,
    rng: &mut R,
) -> Result<NibbleField, PinBlockError> {
    if !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinBlockError::InvalidPinFormat);
    }

    let length = pin.len();
    if !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&length) {
        return Err(invalid_length(length));
    }
    let length_nibble = u8::try_from(length).map_err(|_| invalid_length(length))?;

    let mut padding = Zeroizing::new([0u8; PAYLOAD_NIBBLES]);
    rng.try_fill_bytes(padding.as_mut_slice())
        .map_err(|e| PinBlockError::Randomness(format!("padding fill failed: {e}")))?;

    let mut nibbles = Zeroizing::new([0u8; NIBBLE_COUNT]);
    nibbles[0] = FORMAT_CODE;
    nibbles[1] = length_nibble;

    let mut digits = pin.bytes().map(|b| b.wrapping_sub(b'0'));
    for (slot, pad) in nibbles[HEADER_NIBBLES..].iter_mut().zip(padding.iter()) {
        *slot = digits.next().unwrap_or(pad & MAX_NIBBLE);
    }

    Ok(NibbleField::from_masked(*nibbles))
}

const fn invalid_length(length: usize) -> PinBlockError {
    PinBlockError::InvalidPinLength {
        length,
        min: MIN_PIN_LENGTH,
        max: MAX_PIN_LENGTH,
    }
}
