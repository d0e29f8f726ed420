//! Public encode/decode operations.
//!
//! [`PinBlockService`] validates input, builds both fields, and runs the
//! codec. Every call is a single synchronous pass with no shared state;
//! the only resource a caller supplies is the randomness source for PIN
//! padding.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::codec::{self, PinBlock};
use crate::error::PinBlockError;
use crate::nibble::NibbleField;
use crate::pan_field::build_pan_field;
use crate::pin_field::{build_pin_field, HEADER_NIBBLES, MAX_PIN_LENGTH, MIN_PIN_LENGTH};
use crate::policy::PinPolicy;

/// Largest decimal digit value.
const MAX_DIGIT: u8 = 9;

/// Encoder/decoder bound to a PIN length policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinBlockService {
    policy: PinPolicy,
}

impl PinBlockService {
    /// Create a service enforcing `policy` on encode.
    #[must_use]
    pub const fn new(policy: PinPolicy) -> Self {
        Self { policy }
    }

    /// The policy applied to PINs on encode.
    #[must_use]
    pub const fn policy(&self) -> &PinPolicy {
        &self.policy
    }

    /// Encode `pin` against `pan` into a PIN block.
    ///
    /// Padding is drawn from `rng`, so repeated calls with the same input
    /// produce different blocks that all decode to `pin`.
    ///
    /// # Errors
    ///
    /// - [`PinBlockError::InvalidPinFormat`] / [`PinBlockError::InvalidPinLength`]
    ///   for a malformed PIN or one outside the policy
    /// - [`PinBlockError::InvalidPanFormat`] / [`PinBlockError::InvalidPanLength`]
    ///   for a malformed PAN
    /// - [`PinBlockError::Randomness`] if `rng` fails
    pub fn encode_block<R: RngCore + ?Sized>(
        &self,
        pin: &str,
        pan: &str,
        rng: &mut R,
    ) -> Result<PinBlock, PinBlockError> {
        let pin_field = build_pin_field(pin, rng)?;
        self.policy.check(pin.len())?;
        let pan_field = build_pan_field(pan)?;
        Ok(codec::pack(&pin_field, &pan_field))
    }

    /// Encode `pin` against `pan` and return the 16-character uppercase hex
    /// form.
    ///
    /// # Errors
    ///
    /// Same as [`Self::encode_block`].
    pub fn encode<R: RngCore + ?Sized>(
        &self,
        pin: &str,
        pan: &str,
        rng: &mut R,
    ) -> Result<String, PinBlockError> {
        self.encode_block(pin, pan, rng).map(|block| block.to_hex())
    }

    /// Recover the PIN from a hex PIN block and the PAN it was built with.
    ///
    /// The length policy is not applied: any PIN the format can carry is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`PinBlockError::InvalidPanFormat`] / [`PinBlockError::InvalidPanLength`]
    /// - [`PinBlockError::InvalidHexInput`] if `pin_block_hex` is not hex
    /// - [`PinBlockError::InvalidBlockLength`] unless it decodes to 8 bytes
    /// - [`PinBlockError::DecodeLengthMismatch`] if the recovered length
    ///   nibble does not describe a run of decimal digits
    pub fn decode(&self, pin_block_hex: &str, pan: &str) -> Result<String, PinBlockError> {
        let pan_field = build_pan_field(pan)?;
        let bytes = codec::from_hex(pin_block_hex)?;
        let pin_field = codec::unpack(&bytes, &pan_field)?;
        extract_pin(&pin_field)
    }

    /// [`Self::decode`] for an already-parsed block.
    ///
    /// # Errors
    ///
    /// Same as [`Self::decode`], minus the hex and block-length errors.
    pub fn decode_block(&self, block: &PinBlock, pan: &str) -> Result<String, PinBlockError> {
        let pan_field = build_pan_field(pan)?;
        extract_pin(&codec::unpack_block(block, &pan_field))
    }
}

/// Read the declared length and the digit run that follows the header.
fn extract_pin(field: &NibbleField) -> Result<String, PinBlockError> {
    let nibbles = field.as_nibbles();
    let length = usize::from(nibbles[1]);

    if !(MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&length) {
        return Err(PinBlockError::DecodeLengthMismatch(format!(
            "length nibble {length} is outside {MIN_PIN_LENGTH}..={MAX_PIN_LENGTH}"
        )));
    }

    // HEADER_NIBBLES + MAX_PIN_LENGTH == NIBBLE_COUNT, so the run always fits.
    let digits = nibbles
        .get(HEADER_NIBBLES..)
        .and_then(|payload| payload.get(..length))
        .ok_or_else(|| {
            PinBlockError::DecodeLengthMismatch(format!(
                "block cannot hold {length} digits"
            ))
        })?;

    if digits.iter().any(|&d| d > MAX_DIGIT) {
        return Err(PinBlockError::DecodeLengthMismatch(format!(
            "declared {length} digits but the run contains a non-decimal nibble"
        )));
    }

    Ok(digits
        .iter()
        .map(|&d| char::from(b'0'.wrapping_add(d)))
        .collect())
}

/// Encode with the default policy and OS randomness.
///
/// # Errors
///
/// See [`PinBlockService::encode`].
pub fn encode_pin_block(pin: &str, pan: &str) -> Result<String, PinBlockError> {
    PinBlockService::default().encode(pin, pan, &mut OsRng)
}

/// Decode a hex PIN block against `pan`.
///
/// # Errors
///
/// See [`PinBlockService::decode`].
pub fn decode_pin(pin_block_hex: &str, pan: &str) -> Result<String, PinBlockError> {
    PinBlockService::default().decode(pin_block_hex, pan)
}
