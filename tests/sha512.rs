//! Sanity checks for the SHA-512 collaborator.
//!
//! The signature scheme leans on `sha2` for all digesting; these standard
//! vectors guard against a miscompiled or misconfigured hash backend.

use hex_literal::hex;
use sha2::{Digest, Sha512};

#[test]
fn sha512_abc_vector() {
    let expected = hex!(
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
        "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );

    let mut digest = [0u8; 64];
    digest.copy_from_slice(&Sha512::digest(b"abc"));
    assert_eq!(digest, expected);
}

#[test]
fn sha512_million_a_vector() {
    let expected = hex!(
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb"
        "de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );

    let mut hash = Sha512::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hash.update(chunk);
    }
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hash.finalize());
    assert_eq!(digest, expected);
}
