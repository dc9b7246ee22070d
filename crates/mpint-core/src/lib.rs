//! `mpint-core` — owned arbitrary-precision unsigned integers.
//!
//! Read-only inputs are taken by shared reference, so reading a byte
//! buffer or copying a value can never write to its source. Storage is
//! owned, zeroized on release, and every allocation is fallible.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod bigint;
pub mod digits;
pub mod error;
pub mod limits;

mod hex;
mod serde_hex;

pub use bigint::BigInt;
pub use digits::{Digit, DIGIT_BITS, DIGIT_BYTES};
pub use error::MpError;
pub use limits::Limits;
