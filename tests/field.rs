use curve25519::field::FieldElement;

use hex_literal::hex;
use rand_core::{OsRng, RngCore};

/// The field prime, little-endian.
const P: [u8; 32] = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");

const ONE: [u8; 32] = hex!("0100000000000000000000000000000000000000000000000000000000000000");

#[test]
fn test_encoding_is_canonical() {
    // p itself encodes as zero
    assert_eq!(FieldElement::from_bytes(&P).to_bytes(), [0u8; 32]);

    // p + 1 encodes as one
    let mut p1 = P;
    p1[0] += 1;
    assert_eq!(FieldElement::from_bytes(&p1).to_bytes(), ONE);

    // 2^256 - 1 ≡ 2^256 - 1 - 2p = 37
    let mut expected = [0u8; 32];
    expected[0] = 37;
    assert_eq!(FieldElement::from_bytes(&[0xFF; 32]).to_bytes(), expected);
}

#[test]
fn test_add_sub_round_trip() {
    for _ in 0..16 {
        let mut a_bytes = [0u8; 32];
        let mut b_bytes = [0u8; 32];
        OsRng.fill_bytes(&mut a_bytes);
        OsRng.fill_bytes(&mut b_bytes);

        let a = FieldElement::from_bytes(&a_bytes);
        let b = FieldElement::from_bytes(&b_bytes);

        assert_eq!((a + b - b).to_bytes(), a.to_bytes());
        assert_eq!((a - b + b).to_bytes(), a.to_bytes());
    }
}

#[test]
fn test_mul_commutes_and_distributes() {
    for _ in 0..16 {
        let mut a_bytes = [0u8; 32];
        let mut b_bytes = [0u8; 32];
        let mut c_bytes = [0u8; 32];
        OsRng.fill_bytes(&mut a_bytes);
        OsRng.fill_bytes(&mut b_bytes);
        OsRng.fill_bytes(&mut c_bytes);

        let a = FieldElement::from_bytes(&a_bytes);
        let b = FieldElement::from_bytes(&b_bytes);
        let c = FieldElement::from_bytes(&c_bytes);

        assert_eq!((a * b).to_bytes(), (b * a).to_bytes());
        assert_eq!((a * (b + c)).to_bytes(), (a * b + a * c).to_bytes());
    }
}

#[test]
fn test_inverse() {
    let small = FieldElement::from_bytes(&{
        let mut b = [0u8; 32];
        b[0] = 0xE9;
        b[1] = 0xC3; // 50153
        b
    });
    assert_eq!((small * small.invert()).to_bytes(), ONE);

    for _ in 0..16 {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);

        let f = FieldElement::from_bytes(&bytes);
        if f.to_bytes() == [0u8; 32] {
            continue;
        }
        assert_eq!((f * f.invert()).to_bytes(), ONE);
    }
}

#[test]
fn test_inverse_of_zero_is_zero() {
    let zero = FieldElement::from_bytes(&[0u8; 32]);
    assert_eq!(zero.invert().to_bytes(), [0u8; 32]);
}
