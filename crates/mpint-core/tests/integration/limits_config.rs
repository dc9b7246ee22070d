//! Loading [`Limits`] and applying them to values.

use mpint_core::{BigInt, Limits, MpError};

#[test]
fn json_limits_bound_peer_input() {
    let limits = Limits::from_json(r#"{ "maxBytes": 256 }"#).unwrap();
    let mut peer_value = BigInt::with_limits(limits);

    peer_value.set_from_bytes_be(&[0xAB; 256]).unwrap();
    assert_eq!(peer_value.byte_len(), 256);

    let err = peer_value.set_from_bytes_be(&[0xAB; 257]).unwrap_err();
    assert_eq!(err, MpError::OutOfMemory { requested: 257 });
    assert_eq!(peer_value.byte_len(), 256);
}

#[test]
fn unknown_fields_are_ignored() {
    let limits = Limits::from_json(r#"{ "maxBytes": 64, "comment": "srp" }"#).unwrap();
    assert_eq!(limits.max_bytes, 64);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(
        Limits::from_json("{ maxBytes: 1 }"),
        Err(MpError::InvalidLimits(_))
    ));
}

#[test]
fn zero_ceiling_still_allows_zero() {
    let mut value = BigInt::with_limits(Limits::new(0));
    value.set_from_bytes_be(&[0, 0, 0]).unwrap();
    assert!(value.is_zero());
    assert!(value.set_from_bytes_be(&[1]).is_err());
}

#[test]
fn growth_by_addition_respects_ceiling() {
    let mut value = BigInt::with_limits(Limits::new(8));
    value.set_from_bytes_be(&[0x01]).unwrap();
    let big = BigInt::from_bytes_be(&[0x01; 9]).unwrap();
    assert!(matches!(
        value.try_add_assign(&big),
        Err(MpError::OutOfMemory { .. })
    ));
    assert_eq!(value, 1);
}
