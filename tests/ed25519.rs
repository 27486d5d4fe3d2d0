use curve25519::ed25519::{
    Blinding, PrivateKey, PublicKey, Signature, VerifyContext, generate_keypair, keypair, sign,
    verify,
};
use curve25519::edwards::{ExtPoint, base_point_multiply};

use hex_literal::hex;
use rand_core::{OsRng, RngCore};

// RFC 8032 test 2
const RFC8032_SEED: [u8; 32] =
    hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
const RFC8032_PK: [u8; 32] =
    hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
const RFC8032_MSG: [u8; 1] = hex!("72");
const RFC8032_SIG: [u8; 64] = hex!(
    "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da"
    "085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00"
);

/// Order of the base point, little-endian.
const ORDER: [u8; 32] = hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");

#[test]
fn test_rfc8032_vector() {
    let (public, private) = keypair(&RFC8032_SEED, None);
    assert_eq!(public.to_bytes(), RFC8032_PK);

    let signature = sign(&private, None, &RFC8032_MSG);
    assert_eq!(signature.to_bytes(), RFC8032_SIG);

    assert!(verify(&signature, &public, &RFC8032_MSG));
}

#[test]
fn test_rfc8032_vector_with_blinding() {
    // blinding must not change the mathematical output
    let blinding = Blinding::random(&mut OsRng);

    let (public, private) = keypair(&RFC8032_SEED, Some(&blinding));
    assert_eq!(public.to_bytes(), RFC8032_PK);

    let signature = sign(&private, Some(&blinding), &RFC8032_MSG);
    assert_eq!(signature.to_bytes(), RFC8032_SIG);

    assert!(verify(&signature, &public, &RFC8032_MSG));
}

#[test]
fn test_sign_and_verify() {
    let message: &[u8] = b"Hello, world!";

    let (public, private) = generate_keypair(&mut OsRng, None);
    let signature = sign(&private, None, message);

    assert!(
        verify(&signature, &public, message),
        "signature should be valid"
    );

    let mut bad = signature.to_bytes();
    bad[44] ^= 0x10;
    assert!(
        !verify(&Signature::from_bytes(bad), &public, message),
        "signature modification must be detected"
    );
}

#[test]
fn test_tampering_is_rejected() {
    let message = b"tamper with me";
    let (public, private) = generate_keypair(&mut OsRng, None);
    let signature = sign(&private, None, message);

    // any single flipped signature bit must fail
    for byte in [0usize, 13, 31, 32, 47, 63] {
        for bit in 0..8 {
            let mut bad = signature.to_bytes();
            bad[byte] ^= 1 << bit;
            assert!(!verify(&Signature::from_bytes(bad), &public, message));
        }
    }

    // a flipped message bit must fail
    let mut bad_msg = *message;
    bad_msg[3] ^= 0x04;
    assert!(!verify(&signature, &public, &bad_msg));

    // a flipped public-key bit must fail (or fail to decode at all)
    let mut bad_pk = public.to_bytes();
    bad_pk[17] ^= 0x40;
    assert!(!verify(
        &signature,
        &PublicKey::from_bytes(bad_pk),
        message
    ));
}

#[test]
fn test_verify_context_reuse() {
    let (public, private) = generate_keypair(&mut OsRng, None);
    let ctx = VerifyContext::new(&public).expect("valid public key");

    for len in [0usize, 1, 31, 64, 100, 1000] {
        let mut message = vec![0u8; len];
        OsRng.fill_bytes(&mut message);

        let signature = sign(&private, None, &message);
        assert!(ctx.check(&signature, &message));

        if len > 0 {
            message[len / 2] ^= 1;
            assert!(!ctx.check(&signature, &message));
        }
    }
}

#[test]
fn test_private_key_round_trip() {
    let (public, private) = keypair(&RFC8032_SEED, None);

    let restored = PrivateKey::from_bytes(&private.to_bytes());
    assert_eq!(restored.public_key().to_bytes(), public.to_bytes());

    let signature = sign(&restored, None, &RFC8032_MSG);
    assert_eq!(signature.to_bytes(), RFC8032_SIG);
}

#[test]
fn test_non_canonical_scalar_is_rejected() {
    let (public, private) = generate_keypair(&mut OsRng, None);
    let message = b"canonical only";
    let signature = sign(&private, None, message);

    // s + ℓ encodes the same residue but is not canonical
    let mut bad = signature.to_bytes();
    let mut carry = 0u16;
    for i in 0..32 {
        let sum = bad[32 + i] as u16 + ORDER[i] as u16 + carry;
        bad[32 + i] = sum as u8;
        carry = sum >> 8;
    }
    assert!(!verify(&Signature::from_bytes(bad), &public, message));
}

#[test]
fn test_decode_encode_round_trip() {
    for _ in 0..8 {
        let (public, _) = generate_keypair(&mut OsRng, None);
        let point = ExtPoint::decode(&public.to_bytes()).expect("generated keys decode");
        assert_eq!(point.encode(), public.to_bytes());
    }
}

#[test]
fn test_decode_rejects_invalid_encodings() {
    // y = p is not canonical
    let p_bytes = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert!(ExtPoint::decode(&p_bytes).is_none());

    // y = 2 has no matching x on the curve
    let mut off_curve = [0u8; 32];
    off_curve[0] = 2;
    assert!(ExtPoint::decode(&off_curve).is_none());

    // x = 0 with the sign bit set is the non-canonical identity
    let mut bad_identity = [0u8; 32];
    bad_identity[0] = 1;
    bad_identity[31] = 0x80;
    assert!(ExtPoint::decode(&bad_identity).is_none());
}

#[test]
fn test_zero_scalar_yields_identity() {
    // 0·B = (0, 1), whose encoding is y = 1 with a clear sign bit
    let mut identity = [0u8; 32];
    identity[0] = 1;

    assert_eq!(base_point_multiply(&[0u8; 32]).encode(), identity);
}

#[test]
fn test_order_times_base_is_identity() {
    let mut identity = [0u8; 32];
    identity[0] = 1;

    assert_eq!(base_point_multiply(&ORDER).encode(), identity);
}
