//! Fixed-width nibble field shared by the PIN and PAN builders.
//!
//! A [`NibbleField`] is always exactly [`NIBBLE_COUNT`] values, each in
//! `0..=15`. The PIN flavor carries secret digits, so the field is zeroized
//! on drop and its `Debug` output is masked.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of nibbles in a field (one 8-byte PIN block).
pub const NIBBLE_COUNT: usize = 16;

/// Largest value a nibble can hold.
pub const MAX_NIBBLE: u8 = 0x0F;

/// Sixteen 4-bit values, immutable once built.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NibbleField([u8; NIBBLE_COUNT]);

impl NibbleField {
    /// Build a field from explicit values.
    ///
    /// Returns `None` if any value does not fit in four bits.
    #[must_use]
    pub fn new(nibbles: [u8; NIBBLE_COUNT]) -> Option<Self> {
        if nibbles.iter().all(|&n| n <= MAX_NIBBLE) {
            Some(Self(nibbles))
        } else {
            None
        }
    }

    /// Build a field from values already known to be nibbles.
    ///
    /// The high bits are masked off so the invariant holds regardless.
    pub(crate) fn from_masked(mut nibbles: [u8; NIBBLE_COUNT]) -> Self {
        for n in &mut nibbles {
            *n &= MAX_NIBBLE;
        }
        Self(nibbles)
    }

    /// Borrow the sixteen values in order.
    #[must_use]
    pub const fn as_nibbles(&self) -> &[u8; NIBBLE_COUNT] {
        &self.0
    }

    /// Value at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Positional XOR of two fields.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let mut out = [0u8; NIBBLE_COUNT];
        for (slot, (a, b)) in out.iter_mut().zip(self.0.iter().zip(other.0.iter())) {
            *slot = a ^ b;
        }
        Self(out)
    }
}

impl fmt::Debug for NibbleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NibbleField(***)")
    }
}
