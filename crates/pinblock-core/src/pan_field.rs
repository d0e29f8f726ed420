//! Account field construction: `[0, 0, 0, 0, A1 .. A12]` where `A1 .. A12`
//! are the rightmost twelve PAN digits.

use crate::error::PinBlockError;
use crate::nibble::{NibbleField, NIBBLE_COUNT};

/// Fewest PAN digits accepted.
pub const MIN_PAN_LENGTH: usize = 12;

/// Digits of the PAN that enter the field.
const ACCOUNT_DIGITS: usize = 12;

/// Index of the first account nibble.
const ACCOUNT_OFFSET: usize = 4;

/// Build the 16-nibble PAN field.
///
/// # Errors
///
/// - [`PinBlockError::InvalidPanFormat`] if `pan` has a non-digit character
/// - [`PinBlockError::InvalidPanLength`] if `pan` has fewer than
///   [`MIN_PAN_LENGTH`] digits
pub fn build_pan_field(pan: &str) -> Result<NibbleField, PinBlockError> {
    if !pan.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinBlockError::InvalidPanFormat);
    }

    let length = pan.len();
    if length < MIN_PAN_LENGTH {
        return Err(PinBlockError::InvalidPanLength { length });
    }

    // length >= ACCOUNT_DIGITS, so the subtraction cannot wrap.
    let account = &pan.as_bytes()[length.wrapping_sub(ACCOUNT_DIGITS)..];

    let mut nibbles = [0u8; NIBBLE_COUNT];
    for (slot, b) in nibbles[ACCOUNT_OFFSET..].iter_mut().zip(account) {
        *slot = b.wrapping_sub(b'0');
    }

    Ok(NibbleField::from_masked(nibbles))
}
