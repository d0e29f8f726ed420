//! Error types for `pinblock-core`.

use thiserror::Error;

/// Errors produced by PIN block encoding and decoding.
///
/// Messages never contain PIN digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinBlockError {
    /// The PIN contains a character that is not an ASCII digit.
    #[error("PIN must contain only ASCII digits")]
    InvalidPinFormat,

    /// The PIN digit count is outside the accepted range.
    #[error("PIN length must be between {min} and {max} digits, got {length}")]
    InvalidPinLength {
        /// Number of characters supplied.
        length: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// The PAN contains a character that is not an ASCII digit.
    #[error("PAN must contain only ASCII digits")]
    InvalidPanFormat,

    /// The PAN has fewer digits than the account field needs.
    #[error("PAN must contain at least 12 digits, got {length}")]
    InvalidPanLength {
        /// Number of digits supplied.
        length: usize,
    },

    /// The PIN block text is not hexadecimal.
    #[error("invalid hex input: {0}")]
    InvalidHexInput(String),

    /// The decoded PIN block is not exactly 8 bytes.
    #[error("PIN block must be exactly 8 bytes, got {length}")]
    InvalidBlockLength {
        /// Number of bytes after hex decoding.
        length: usize,
    },

    /// The recovered length nibble does not match a valid digit run.
    #[error("decoded PIN length mismatch: {0}")]
    DecodeLengthMismatch(String),

    /// The randomness source could not supply padding.
    #[error("randomness source failure: {0}")]
    Randomness(String),
}
