//! Allocation ceiling carried by every [`BigInt`](crate::BigInt).
//!
//! Values received from a peer (an SRP public key, say) are sized by the
//! peer. [`Limits`] bounds how much digit storage such input may claim.
//! A refused request surfaces as [`MpError::OutOfMemory`], exactly like a
//! failed allocation.

use serde::{Deserialize, Serialize};

use crate::digits::DIGIT_BYTES;
use crate::error::MpError;

/// 16 MiB, far above any cryptographic group size.
const DEFAULT_MAX_BYTES: usize = 16 * 1024 * 1024;

/// Per-instance allocation ceiling.
///
/// Loaded from JSON with [`Limits::from_json`]; missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Largest magnitude, in bytes, a single instance may store. Checked
    /// exactly against the minimal big-endian length of each new value.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

const fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

impl Limits {
    /// Ceiling of `max_bytes` bytes.
    #[must_use]
    pub const fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// No ceiling beyond what the allocator itself can provide.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_bytes: usize::MAX,
        }
    }

    /// Parse limits from a JSON document such as `{"maxBytes": 4096}`.
    ///
    /// # Errors
    ///
    /// Returns `MpError::InvalidLimits` if the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, MpError> {
        serde_json::from_str(json).map_err(|e| MpError::InvalidLimits(e.to_string()))
    }

    /// Largest number of digits an instance may allocate. Capacity is
    /// digit-granular; the magnitude itself is held to [`Self::max_bytes`].
    #[must_use]
    pub const fn max_digits(self) -> usize {
        self.max_bytes.div_ceil(DIGIT_BYTES)
    }

    /// Check the byte length of a magnitude against the ceiling.
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if `bytes` exceeds `max_bytes`.
    pub(crate) fn check_bytes(self, bytes: usize) -> Result<(), MpError> {
        if bytes <= self.max_bytes {
            return Ok(());
        }
        tracing::warn!(
            requested = bytes,
            max_bytes = self.max_bytes,
            "magnitude refused by limits"
        );
        Err(MpError::OutOfMemory { requested: bytes })
    }

    /// Check a digit allocation against the ceiling.
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if `digits` exceeds [`Self::max_digits`].
    pub(crate) fn check_digits(self, digits: usize) -> Result<(), MpError> {
        if digits <= self.max_digits() {
            return Ok(());
        }
        let requested = digits.saturating_mul(DIGIT_BYTES);
        tracing::warn!(
            requested,
            max_bytes = self.max_bytes,
            "digit allocation refused by limits"
        );
        Err(MpError::OutOfMemory { requested })
    }
}
