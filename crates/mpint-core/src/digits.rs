//! Owned digit storage for [`BigInt`](crate::BigInt).
//!
//! [`DigitStore`] holds little-endian machine words and provides:
//! - Fallible growth: every allocation goes through `try_reserve_exact`
//!   and is checked against the owner's [`Limits`]
//! - Move-on-grow: a larger buffer is always a fresh allocation; the old
//!   one is zeroized before it is freed, so no stale copy survives
//! - Zeroization on reset and on drop via [`zeroize`]

use crate::error::MpError;
use crate::limits::Limits;
use zeroize::Zeroize;

/// One machine word of magnitude.
pub type Digit = u64;

/// Bytes per [`Digit`].
pub const DIGIT_BYTES: usize = 8;

/// Bits per [`Digit`].
pub const DIGIT_BITS: u32 = Digit::BITS;

/// Little-endian digit vector with no most-significant zero digits once
/// its owner has finished writing.
///
/// Writes never reallocate implicitly: callers reserve first, then push
/// within capacity.
#[derive(Default)]
pub(crate) struct DigitStore {
    words: Vec<Digit>,
}

impl DigitStore {
    /// Empty store. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Empty store with room for exactly `digits` digits.
    pub(crate) fn with_capacity(digits: usize, limits: Limits) -> Result<Self, MpError> {
        Ok(Self {
            words: allocate(digits, limits)?,
        })
    }

    pub(crate) const fn as_slice(&self) -> &[Digit] {
        self.words.as_slice()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.words
    }

    pub(crate) const fn len(&self) -> usize {
        self.words.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Grow capacity to at least `digits`, keeping the current contents.
    pub(crate) fn reserve(&mut self, digits: usize, limits: Limits) -> Result<(), MpError> {
        if digits <= self.words.capacity() {
            return Ok(());
        }
        let mut grown = allocate(digits, limits)?;
        grown.extend_from_slice(&self.words);
        self.replace(grown);
        Ok(())
    }

    /// Empty the store and guarantee room for `digits` digits.
    ///
    /// Existing storage is reused when it is large enough. Otherwise the
    /// new buffer is allocated before the old contents are touched, so a
    /// failed call leaves the store unchanged.
    pub(crate) fn reset_for(&mut self, digits: usize, limits: Limits) -> Result<(), MpError> {
        if digits <= self.words.capacity() {
            self.words.zeroize();
            return Ok(());
        }
        let fresh = allocate(digits, limits)?;
        self.replace(fresh);
        Ok(())
    }

    /// Append one digit. The caller must have reserved room for it.
    pub(crate) fn push(&mut self, digit: Digit) {
        debug_assert!(
            self.words.len() < self.words.capacity(),
            "push past reserved capacity"
        );
        self.words.push(digit);
    }

    /// Append `digits`. The caller must have reserved room for them.
    pub(crate) fn extend_from(&mut self, digits: &[Digit]) {
        debug_assert!(
            self.words.capacity().saturating_sub(self.words.len()) >= digits.len(),
            "extend past reserved capacity"
        );
        self.words.extend_from_slice(digits);
    }

    /// Pad with zero digits up to `len`. The caller must have reserved room.
    pub(crate) fn zero_extend(&mut self, len: usize) {
        debug_assert!(len <= self.words.capacity(), "zero_extend past capacity");
        if len > self.words.len() {
            self.words.resize(len, 0);
        }
    }

    /// Drop most-significant zero digits.
    pub(crate) fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }

    /// Zeroize every digit and empty the store, keeping its capacity.
    pub(crate) fn clear(&mut self) {
        self.words.zeroize();
    }

    fn replace(&mut self, fresh: Vec<Digit>) {
        tracing::trace!(
            from = self.words.capacity(),
            to = fresh.capacity(),
            "digit storage reallocated"
        );
        self.words.zeroize();
        self.words = fresh;
    }
}

impl Drop for DigitStore {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

/// Allocate an empty vector with capacity for `digits`, honouring `limits`.
fn allocate(digits: usize, limits: Limits) -> Result<Vec<Digit>, MpError> {
    limits.check_digits(digits)?;
    let mut words = Vec::new();
    words.try_reserve_exact(digits).map_err(|e| {
        let requested = digits.saturating_mul(DIGIT_BYTES);
        tracing::warn!(requested, error = %e, "digit allocation failed");
        MpError::OutOfMemory { requested }
    })?;
    Ok(words)
}
