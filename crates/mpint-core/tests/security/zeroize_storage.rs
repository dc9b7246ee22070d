//! Clearing a value must not leave its digits readable through the value.

use mpint_core::BigInt;
use zeroize::Zeroize;

#[test]
fn zeroize_clears_value() {
    let mut value = BigInt::from_hex("DEADBEEF DEADBEEF DEADBEEF").unwrap();
    value.zeroize();
    assert!(value.is_zero());
    assert!(value.to_bytes_be().unwrap().is_empty());
    assert_eq!(value.to_hex(), "0");
}

#[test]
fn reset_then_grow_reveals_no_residue() {
    let mut value = BigInt::from_bytes_be(&[0xDE; 64]).unwrap();
    value.set_zero();
    value
        .try_add_assign(&BigInt::try_from(1_u64).unwrap())
        .unwrap();
    // Reusing the zeroized storage must not resurrect the old high digits.
    assert_eq!(value, 1);
    assert_eq!(value.to_bytes_be_padded(64).unwrap()[..63], [0u8; 63]);
}

#[test]
fn shorter_reread_reveals_no_residue() {
    let mut value = BigInt::from_bytes_be(&[0xDE; 64]).unwrap();
    value.set_from_bytes_be(&[0x01, 0x02]).unwrap();
    assert_eq!(value.digit_count(), 1);
    assert_eq!(value.to_bytes_be_padded(64).unwrap()[..62], [0u8; 62]);
}
