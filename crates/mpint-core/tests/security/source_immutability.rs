//! Read and copy operations must leave their inputs byte-for-byte intact.
//!
//! Each test takes a `blake3` digest of the input before and after the call.

use mpint_core::BigInt;

fn digest(bytes: &[u8]) -> blake3::Hash {
    blake3::hash(bytes)
}

fn sample_buffer() -> Vec<u8> {
    (0..200u8).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect()
}

#[test]
fn from_bytes_be_does_not_modify_buffer() {
    let buf = sample_buffer();
    let before = digest(&buf);
    let _value = BigInt::from_bytes_be(&buf).unwrap();
    assert_eq!(digest(&buf), before);
}

#[test]
fn set_from_bytes_be_does_not_modify_buffer() {
    let buf = sample_buffer();
    let before = digest(&buf);
    let mut value = BigInt::from_bytes_be(&[0xFF; 300]).unwrap();
    value.set_from_bytes_be(&buf).unwrap();
    assert_eq!(digest(&buf), before);
}

#[test]
fn try_clone_does_not_modify_source() {
    let source = BigInt::from_bytes_be(&sample_buffer()).unwrap();
    let before = digest(&source.to_bytes_be().unwrap());
    let copy = source.try_clone().unwrap();
    drop(copy);
    assert_eq!(digest(&source.to_bytes_be().unwrap()), before);
}

#[test]
fn assign_from_does_not_modify_source() {
    let source = BigInt::from_bytes_be(&sample_buffer()).unwrap();
    let before = digest(&source.to_bytes_be().unwrap());
    let mut dest = BigInt::new();
    dest.assign_from(&source).unwrap();
    dest.set_zero();
    assert_eq!(digest(&source.to_bytes_be().unwrap()), before);
}

#[test]
fn failed_read_does_not_modify_buffer() {
    let buf = sample_buffer();
    let before = digest(&buf);
    let mut value = BigInt::with_limits(mpint_core::Limits::new(8));
    assert!(value.set_from_bytes_be(&buf).is_err());
    assert_eq!(digest(&buf), before);
}
