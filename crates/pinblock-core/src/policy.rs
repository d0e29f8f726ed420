//! Caller-side PIN length policy, stored as plain JSON.
//!
//! The format itself accepts 1–14 digits. Callers usually narrow that
//! (card terminals typically take 4–12), and the policy is where that
//! narrowing lives.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PinBlockError;
use crate::pin_field::{MAX_PIN_LENGTH, MIN_PIN_LENGTH};

/// Shortest PIN accepted by [`PinPolicy::interactive`].
pub const INTERACTIVE_MIN_LENGTH: usize = 4;

/// Longest PIN accepted by [`PinPolicy::interactive`].
pub const INTERACTIVE_MAX_LENGTH: usize = 12;

/// Accepted PIN length range for encoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PinPolicy {
    /// Shortest accepted PIN (at least 1).
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Longest accepted PIN (at most 14).
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for PinPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

const fn default_min_length() -> usize {
    MIN_PIN_LENGTH
}
const fn default_max_length() -> usize {
    MAX_PIN_LENGTH
}

impl PinPolicy {
    /// Build a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`PinBlockError::InvalidPinLength`] if the range is empty or
    /// leaves the 1–14 range the format can carry.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, PinBlockError> {
        let policy = Self {
            min_length,
            max_length,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The 4–12 digit range used for interactive PIN entry.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            min_length: INTERACTIVE_MIN_LENGTH,
            max_length: INTERACTIVE_MAX_LENGTH,
        }
    }

    /// Check that the range is non-empty and inside 1–14.
    ///
    /// # Errors
    ///
    /// Returns [`PinBlockError::InvalidPinLength`] carrying the offending
    /// bounds.
    pub const fn validate(&self) -> Result<(), PinBlockError> {
        if self.min_length < MIN_PIN_LENGTH
            || self.max_length > MAX_PIN_LENGTH
            || self.min_length > self.max_length
        {
            return Err(PinBlockError::InvalidPinLength {
                length: self.min_length,
                min: MIN_PIN_LENGTH,
                max: MAX_PIN_LENGTH,
            });
        }
        Ok(())
    }

    /// Whether a PIN of `length` digits is allowed.
    #[must_use]
    pub const fn allows(&self, length: usize) -> bool {
        length >= self.min_length && length <= self.max_length
    }

    /// Reject a PIN length outside the policy.
    ///
    /// # Errors
    ///
    /// Returns [`PinBlockError::InvalidPinLength`] with this policy's bounds.
    pub const fn check(&self, length: usize) -> Result<(), PinBlockError> {
        if self.allows(length) {
            Ok(())
        } else {
            Err(PinBlockError::InvalidPinLength {
                length,
                min: self.min_length,
                max: self.max_length,
            })
        }
    }

    /// Load a policy from a JSON file.
    ///
    /// Returns [`Default::default()`] when the file is missing, is not valid
    /// JSON, or describes an invalid range. Missing fields take defaults.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str::<Self>(&contents).ok())
            .filter(|policy| policy.validate().is_ok())
            .unwrap_or_default()
    }

    /// Persist the policy as pretty JSON.
    ///
    /// Writes to a sibling `.tmp` file, then renames over `path`.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the directory does not exist or the file
    /// system rejects the write/rename.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, path)?;

        Ok(())
    }
}
