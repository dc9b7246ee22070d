//! Big-endian magnitude decoding and encoding.

use mpint_core::{BigInt, MpError};

#[test]
fn known_buffers_decode_to_expected_values() {
    let cases: &[(&[u8], u64)] = &[
        (&[], 0),
        (&[0x00], 0),
        (&[0x01, 0x00], 256),
        (&[0x00, 0x01, 0x00], 256),
        (&[0xFF; 8], u64::MAX),
        (&[0x00, 0x00, 0x12, 0x34, 0x56, 0x78], 0x1234_5678),
    ];
    for (bytes, expected) in cases {
        let value = BigInt::from_bytes_be(bytes).expect("allocation should succeed");
        assert_eq!(value, *expected, "decoding {bytes:02x?}");
    }
}

#[test]
fn read_into_existing_value() {
    let mut value = BigInt::try_from(99_u64).unwrap();
    value.set_from_bytes_be(&[0x01, 0x00]).unwrap();
    assert_eq!(value, 256);

    value.set_from_bytes_be(&[]).unwrap();
    assert!(value.is_zero());
}

#[test]
fn two_hundred_fifty_six_byte_value_roundtrips() {
    let bytes: Vec<u8> = (1..=255).chain(std::iter::once(7)).collect();
    let value = BigInt::from_bytes_be(&bytes).unwrap();
    assert_eq!(value.byte_len(), 256);
    assert_eq!(value.bit_len(), 2041);
    assert_eq!(value.digit_count(), 32);
    assert_eq!(value.to_bytes_be().unwrap(), bytes);
}

#[test]
fn zero_roundtrips_through_empty_encoding() {
    let zero = BigInt::from_bytes_be(&[]).unwrap();
    let encoded = zero.to_bytes_be().unwrap();
    assert!(encoded.is_empty());
    assert_eq!(BigInt::from_bytes_be(&encoded).unwrap(), zero);
}

#[test]
fn srp_style_padding() {
    // PAD(g) to the width of a 1024-bit modulus.
    let g = BigInt::try_from(2_u64).unwrap();
    let padded = g.to_bytes_be_padded(128).unwrap();
    assert_eq!(padded.len(), 128);
    assert_eq!(padded[127], 2);
    assert!(padded[..127].iter().all(|&b| b == 0));
}

#[test]
fn write_into_too_small_buffer_reports_sizes() {
    let value = BigInt::from_bytes_be(&[1, 2, 3, 4]).unwrap();
    let mut out = [0u8; 3];
    assert_eq!(
        value.write_bytes_be(&mut out),
        Err(MpError::Truncated {
            needed: 4,
            available: 3
        })
    );
}

#[test]
fn random_value_roundtrips() {
    let value = BigInt::random(48).unwrap();
    let encoded = value.to_bytes_be().unwrap();
    assert_eq!(BigInt::from_bytes_be(&encoded).unwrap(), value);
}
