//! Error types for `mpint-core`.

use thiserror::Error;

/// Errors produced by integer construction, copy and encoding.
///
/// Reading bytes, copying and assigning can only fail with
/// [`MpError::OutOfMemory`]; every byte sequence is a valid magnitude.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MpError {
    /// Digit storage could not be allocated, either because the allocator
    /// refused or because the request exceeded the instance's [`Limits`].
    ///
    /// [`Limits`]: crate::limits::Limits
    #[error("out of memory: could not allocate {requested} bytes of digit storage")]
    OutOfMemory {
        /// Size of the refused allocation in bytes.
        requested: usize,
    },

    /// A fixed-width output buffer is too short for the value.
    #[error("output truncated: value needs {needed} bytes, buffer holds {available}")]
    Truncated {
        /// Minimal encoded length of the value.
        needed: usize,
        /// Length of the caller's buffer.
        available: usize,
    },

    /// Hexadecimal text could not be parsed.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Allocation limits could not be loaded.
    #[error("invalid limits: {0}")]
    InvalidLimits(String),

    /// The OS random number generator failed.
    #[error("entropy source failed: {0}")]
    Entropy(String),
}
