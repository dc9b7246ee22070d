//! Arbitrary-precision unsigned integer with owned storage.
//!
//! This module provides:
//! - [`BigInt::from_bytes_be`] / [`BigInt::set_from_bytes_be`] — read an
//!   unsigned big-endian magnitude into a new or existing value
//! - [`BigInt::try_clone`] — deep copy into a new value
//! - [`BigInt::assign_from`] — deep copy into an existing value, reusing
//!   its storage when it is large enough
//! - [`BigInt::to_bytes_be`] / [`BigInt::write_bytes_be`] — the inverse
//!   encoding, minimal or fixed-width
//!
//! # Byte Format
//!
//! Most significant byte first, no length prefix, no sign. Every byte
//! sequence is valid; the empty sequence is zero and leading zero bytes
//! are ignored. Minimal encodings never start with a zero byte, so zero
//! encodes as the empty sequence.
//!
//! # Failure
//!
//! Only allocation, or the [`Limits`] ceiling, can fail. Sources are
//! borrowed immutably and are never written; destinations either receive
//! the full value or keep the one they had.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::digits::{Digit, DigitStore, DIGIT_BITS, DIGIT_BYTES};
use crate::error::MpError;
use crate::limits::Limits;

/// Non-negative integer of unbounded precision.
///
/// Digits are stored little-endian and trimmed, so zero has no digits and
/// equality is a comparison of digit slices. Storage is exclusively owned
/// and zeroized when reset, outgrown or dropped.
///
/// `BigInt` does not implement `Clone`: copying allocates, and allocation
/// failure must be reported. Use [`BigInt::try_clone`] or
/// [`BigInt::assign_from`].
pub struct BigInt {
    digits: DigitStore,
    limits: Limits,
}

impl BigInt {
    /// Zero, with default [`Limits`]. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Zero, with the given allocation ceiling. Does not allocate.
    #[must_use]
    pub const fn with_limits(limits: Limits) -> Self {
        Self {
            digits: DigitStore::new(),
            limits,
        }
    }

    /// The allocation ceiling this value grows under.
    #[must_use]
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    /// Replace the allocation ceiling. Applies to future growth only; the
    /// current value is kept even if it exceeds the new ceiling.
    pub const fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    // -----------------------------------------------------------------------
    // Construction from bytes
    // -----------------------------------------------------------------------

    /// Read an unsigned big-endian magnitude into a new value.
    ///
    /// `buf` is only read and is not retained.
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if digit storage cannot be allocated
    /// within the default [`Limits`].
    pub fn from_bytes_be(buf: &[u8]) -> Result<Self, MpError> {
        let mut value = Self::new();
        value.set_from_bytes_be(buf)?;
        Ok(value)
    }

    /// Overwrite this value with the unsigned big-endian magnitude in `buf`.
    ///
    /// Existing storage is reused when it has room for the new digits.
    /// Leading zero bytes in `buf` do not count towards the allocation.
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if the significant bytes exceed
    /// [`Limits::max_bytes`] or digit storage cannot be allocated. The
    /// previous value is left intact in that case.
    pub fn set_from_bytes_be(&mut self, buf: &[u8]) -> Result<(), MpError> {
        let start = buf.iter().position(|&b| b != 0).unwrap_or(buf.len());
        let significant = buf.get(start..).unwrap_or_default();

        self.limits.check_bytes(significant.len())?;
        self.digits
            .reset_for(significant.len().div_ceil(DIGIT_BYTES), self.limits)?;
        for chunk in significant.rchunks(DIGIT_BYTES) {
            self.digits.push(digit_from_be(chunk));
        }
        Ok(())
    }

    /// A value built from `len` bytes of OS randomness.
    ///
    /// # Errors
    ///
    /// Returns `MpError::Entropy` if the CSPRNG fails, or
    /// `MpError::OutOfMemory` if storage cannot be allocated.
    pub fn random(len: usize) -> Result<Self, MpError> {
        let mut bytes = zeroed_bytes(len)?;
        let filled = OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| MpError::Entropy(format!("CSPRNG fill failed: {e}")));
        let result = filled.and_then(|()| Self::from_bytes_be(&bytes));
        bytes.zeroize();
        result
    }

    // -----------------------------------------------------------------------
    // Copy
    // -----------------------------------------------------------------------

    /// Deep copy into a new, independently owned value.
    ///
    /// The copy has exactly enough storage for the current digits and
    /// inherits this value's [`Limits`].
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if storage for the copy cannot be
    /// allocated. No value is produced in that case.
    pub fn try_clone(&self) -> Result<Self, MpError> {
        self.limits.check_bytes(self.byte_len())?;
        let mut digits = DigitStore::with_capacity(self.digits.len(), self.limits)?;
        digits.extend_from(self.digits.as_slice());
        Ok(Self {
            digits,
            limits: self.limits,
        })
    }

    /// Overwrite this value with a deep copy of `src`.
    ///
    /// Storage is reused when its capacity already fits `src`, otherwise a
    /// larger buffer replaces it. This value keeps its own [`Limits`].
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if storage cannot be grown. The
    /// previous value is left intact in that case.
    pub fn assign_from(&mut self, src: &Self) -> Result<(), MpError> {
        self.limits.check_bytes(src.byte_len())?;
        self.digits.reset_for(src.digits.len(), self.limits)?;
        self.digits.extend_from(src.digits.as_slice());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    /// Length of the minimal big-endian encoding. Zero has length 0.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        match self.digits.as_slice().split_last() {
            None => 0,
            Some((top, rest)) => {
                let top_bytes = top.to_be_bytes().iter().skip_while(|&&b| b == 0).count();
                // Bounded by the byte size of an existing allocation.
                #[allow(clippy::arithmetic_side_effects)]
                let len = rest.len() * DIGIT_BYTES + top_bytes;
                len
            }
        }
    }

    /// Number of significant bits. Zero has 0 bits.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        match self.digits.as_slice().split_last() {
            None => 0,
            Some((top, rest)) => {
                let top_bits = u64::from(DIGIT_BITS.saturating_sub(top.leading_zeros()));
                u64::try_from(rest.len()).map_or(u64::MAX, |n| {
                    n.saturating_mul(u64::from(DIGIT_BITS))
                        .saturating_add(top_bits)
                })
            }
        }
    }

    /// Minimal big-endian encoding: no leading zero bytes, empty for zero.
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if the output cannot be allocated.
    pub fn to_bytes_be(&self) -> Result<Vec<u8>, MpError> {
        let mut out = zeroed_bytes(self.byte_len())?;
        self.write_bytes_be(&mut out)?;
        Ok(out)
    }

    /// Fixed-width big-endian encoding, left-padded with zero bytes.
    ///
    /// # Errors
    ///
    /// Returns `MpError::Truncated` if the value needs more than `len`
    /// bytes, or `MpError::OutOfMemory` if the output cannot be allocated.
    pub fn to_bytes_be_padded(&self, len: usize) -> Result<Vec<u8>, MpError> {
        let needed = self.byte_len();
        if needed > len {
            return Err(MpError::Truncated {
                needed,
                available: len,
            });
        }
        let mut out = zeroed_bytes(len)?;
        self.write_bytes_be(&mut out)?;
        Ok(out)
    }

    /// Write the value right-aligned into `out`, zero-filling the rest.
    ///
    /// # Errors
    ///
    /// Returns `MpError::Truncated` if `out` is shorter than
    /// [`Self::byte_len`]. `out` is not modified in that case.
    pub fn write_bytes_be(&self, out: &mut [u8]) -> Result<(), MpError> {
        let needed = self.byte_len();
        let Some(pad_len) = out.len().checked_sub(needed) else {
            return Err(MpError::Truncated {
                needed,
                available: out.len(),
            });
        };

        let (pad, body) = out.split_at_mut(pad_len);
        pad.fill(0);
        let mut slots = body.iter_mut().rev();
        for digit in self.digits.as_slice() {
            for byte in digit.to_le_bytes() {
                let Some(slot) = slots.next() else { break };
                *slot = byte;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Value operations
    // -----------------------------------------------------------------------

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Set the value to zero. Storage is zeroized and kept for reuse.
    pub fn set_zero(&mut self) {
        self.digits.clear();
    }

    /// Number of significant digits.
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Number of digits the current storage holds without reallocating.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.digits.capacity()
    }

    /// `self += rhs`.
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if the sum exceeds
    /// [`Limits::max_bytes`] or storage cannot be grown. `self` keeps its
    /// previous value in that case.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<(), MpError> {
        self.limits
            .check_bytes(self.byte_len().max(rhs.byte_len()))?;
        let longest = self.digits.len().max(rhs.digits.len());
        self.digits.reserve(longest, self.limits)?;
        self.digits.zero_extend(longest);

        let carry = add_digits(self.digits.as_mut_slice(), rhs.digits.as_slice());
        let needed = if carry {
            longest.saturating_mul(DIGIT_BYTES).saturating_add(1)
        } else {
            self.byte_len()
        };
        let limits = self.limits;
        let room = limits.check_bytes(needed).and_then(|()| {
            if carry {
                self.digits.reserve(longest.saturating_add(1), limits)
            } else {
                Ok(())
            }
        });

        if let Err(e) = room {
            sub_digits(self.digits.as_mut_slice(), rhs.digits.as_slice());
            self.digits.trim();
            return Err(e);
        }
        if carry {
            self.digits.push(1);
        }
        Ok(())
    }

    /// `self + rhs` as a new value with this value's [`Limits`].
    ///
    /// # Errors
    ///
    /// Returns `MpError::OutOfMemory` if storage cannot be allocated.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MpError> {
        let mut sum = self.try_clone()?;
        sum.try_add_assign(rhs)?;
        Ok(sum)
    }

    /// Little-endian digits, most significant non-zero.
    pub(crate) const fn digits(&self) -> &[Digit] {
        self.digits.as_slice()
    }
}

/// `acc += addend` across `acc.len()` digits. Returns the carry out.
fn add_digits(acc: &mut [Digit], addend: &[Digit]) -> bool {
    let mut carry = false;
    for (i, slot) in acc.iter_mut().enumerate() {
        let (sum, c1) = slot.overflowing_add(addend.get(i).copied().unwrap_or(0));
        let (sum, c2) = sum.overflowing_add(Digit::from(carry));
        *slot = sum;
        carry = c1 || c2;
    }
    carry
}

/// `acc -= subtrahend` modulo the width of `acc`.
fn sub_digits(acc: &mut [Digit], subtrahend: &[Digit]) {
    let mut borrow = false;
    for (i, slot) in acc.iter_mut().enumerate() {
        let (diff, b1) = slot.overflowing_sub(subtrahend.get(i).copied().unwrap_or(0));
        let (diff, b2) = diff.overflowing_sub(Digit::from(borrow));
        *slot = diff;
        borrow = b1 || b2;
    }
}

/// Fold up to [`DIGIT_BYTES`] big-endian bytes into one digit.
fn digit_from_be(chunk: &[u8]) -> Digit {
    chunk
        .iter()
        .fold(0, |acc, &b| (acc << 8) | Digit::from(b))
}

/// A zero-filled byte vector of exactly `len` bytes, allocated fallibly.
fn zeroed_bytes(len: usize) -> Result<Vec<u8>, MpError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|e| {
        tracing::warn!(requested = len, error = %e, "byte buffer allocation failed");
        MpError::OutOfMemory { requested: len }
    })?;
    out.resize(len, 0);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u64> for BigInt {
    type Error = MpError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let mut out = Self::new();
        if value != 0 {
            out.digits.reserve(1, out.limits)?;
            out.digits.push(value);
        }
        Ok(out)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for BigInt {}

impl PartialEq<u64> for BigInt {
    fn eq(&self, other: &u64) -> bool {
        match self.digits() {
            [] => *other == 0,
            [only] => only == other,
            _ => false,
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits()
            .len()
            .cmp(&other.digits().len())
            .then_with(|| self.digits().iter().rev().cmp(other.digits().iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits().hash(state);
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.set_zero();
    }
}

// Digit storage zeroizes itself in `Drop`.
impl ZeroizeOnDrop for BigInt {}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt(***, {} bits)", self.bit_len())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
