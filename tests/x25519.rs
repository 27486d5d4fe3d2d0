use curve25519::montgomery::{self, BASE_POINT};
use curve25519::x25519;

use rand_core::{OsRng, RngCore};

/// Order of the base point, little-endian.
const ORDER: [u8; 32] = [
    0xED, 0xD3, 0xF5, 0x5C, 0x1A, 0x63, 0x12, 0x58, 0xD6, 0x9C, 0xF7, 0xA2, 0xDE, 0xF9, 0xDE,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

const ORDER_MINUS_ONE: [u8; 32] = [
    0xEC, 0xD3, 0xF5, 0x5C, 0x1A, 0x63, 0x12, 0x58, 0xD6, 0x9C, 0xF7, 0xA2, 0xDE, 0xF9, 0xDE,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// k1·k2 ≡ 1 (mod base-point order).
const K1: [u8; 32] = [
    0x0B, 0xE3, 0xBE, 0x63, 0xBC, 0x01, 0x6A, 0xAA, 0xC9, 0xE5, 0x27, 0x9F, 0xB7, 0x90, 0xFB,
    0x44, 0x37, 0x2B, 0x2D, 0x4D, 0xA1, 0x73, 0x5B, 0x5B, 0xB0, 0x1A, 0xC0, 0x31, 0x8D, 0x89,
    0x21, 0x03,
];

const K2: [u8; 32] = [
    0x39, 0x03, 0xE3, 0x27, 0x7E, 0x41, 0x93, 0x61, 0x2D, 0x3D, 0x40, 0x19, 0x3D, 0x60, 0x68,
    0x21, 0x60, 0x25, 0xEF, 0x90, 0xB9, 0x8B, 0x24, 0xF2, 0x50, 0x60, 0x94, 0x21, 0xD4, 0x74,
    0x36, 0x05,
];

#[test]
fn test_clamp_is_stable() {
    for _ in 0..32 {
        let mut sk = [0u8; 32];
        OsRng.fill_bytes(&mut sk);

        let once = x25519::clamp(sk);
        assert_eq!(x25519::clamp(once), once);
    }

    let all_ones = x25519::clamp([0xFF; 32]);
    assert_eq!(x25519::clamp(all_ones), all_ones);
}

#[test]
fn test_key_exchange_symmetry() {
    for _ in 0..8 {
        let alice = x25519::generate_secret(&mut OsRng);
        let bob = x25519::generate_secret(&mut OsRng);

        let alice_public = x25519::public_key(&alice);
        let bob_public = x25519::public_key(&bob);

        assert_eq!(
            x25519::shared_secret(&alice, &bob_public),
            x25519::shared_secret(&bob, &alice_public),
            "key exchange secrets must match"
        );
    }
}

#[test]
fn test_key_exchange_reference_keys() {
    let alice_secret: [u8; 32] = [
        0x03, 0xAC, 0x67, 0x42, 0x16, 0xF3, 0xE1, 0x5C, 0x76, 0x1E, 0xE1, 0xA5, 0xE2, 0x55,
        0xF0, 0x67, 0x95, 0x36, 0x23, 0xC8, 0xB3, 0x88, 0xB4, 0x45, 0x9E, 0x13, 0xF9, 0x78,
        0xD7, 0xC8, 0x46, 0xF4,
    ];
    let bruce_secret: [u8; 32] = [
        0x88, 0xD4, 0x26, 0x6F, 0xD4, 0xE6, 0x33, 0x8D, 0x13, 0xB8, 0x45, 0xFC, 0xF2, 0x89,
        0x57, 0x9D, 0x20, 0x9C, 0x89, 0x78, 0x23, 0xB9, 0x21, 0x7D, 0xA3, 0xE1, 0x61, 0x93,
        0x6F, 0x03, 0x15, 0x89,
    ];

    let alice_public = x25519::public_key(&alice_secret);
    let bruce_public = x25519::public_key(&bruce_secret);

    let alice_shared = x25519::shared_secret(&alice_secret, &bruce_public);
    let bruce_shared = x25519::shared_secret(&bruce_secret, &alice_public);

    assert_eq!(alice_shared, bruce_shared);
}

#[test]
fn test_folded_public_key_matches_ladder() {
    let mut sk = [0x44u8; 32];
    assert_eq!(x25519::public_key_folded(&sk), x25519::public_key(&sk));

    for _ in 0..8 {
        OsRng.fill_bytes(&mut sk);
        assert_eq!(x25519::public_key_folded(&sk), x25519::public_key(&sk));
    }
}

#[test]
fn test_base_point_order() {
    // ℓ·B is the neutral element, encoded as all zeros on the ladder side
    assert_eq!(montgomery::scalar_multiply(&BASE_POINT, &ORDER), [0u8; 32]);

    // (ℓ−1)·B = −B, which has the same x-coordinate as B
    assert_eq!(
        montgomery::scalar_multiply(&BASE_POINT, &ORDER_MINUS_ONE),
        BASE_POINT
    );
}

#[test]
fn test_zero_scalar_gives_zero_output() {
    assert_eq!(
        montgomery::scalar_multiply(&BASE_POINT, &[0u8; 32]),
        [0u8; 32]
    );
}

#[test]
fn test_split_key_round_trip() {
    // k1·k2 ≡ 1 mod the order, so multiplying by both returns to start
    let q0 = x25519::public_key(&[0x44; 32]);
    let q1 = montgomery::scalar_multiply(&q0, &K1);
    let q2 = montgomery::scalar_multiply(&q1, &K2);
    assert_eq!(q2, q0);
}
