use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::edwards::mul::base_point_multiply;
use crate::montgomery::{self, BASE_POINT};

/// Applies the RFC 7748 clamp to a 32-byte secret scalar.
///
/// The low three bits are cleared (multiple of the cofactor, immune to
/// small-subgroup confinement), bit 255 is cleared and bit 254 is set
/// (fixed 255-bit length, fixed ladder shape).
pub fn clamp(mut scalar: [u8; 32]) -> [u8; 32] {
    scalar[0] &= 0xF8;
    scalar[31] = (scalar[31] | 0x40) & 0x7F;
    scalar
}

/// Samples a fresh, already clamped secret scalar from the caller's RNG.
pub fn generate_secret<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; 32] {
    let mut secret = [0u8; 32];
    rng.fill_bytes(&mut secret);
    clamp(secret)
}

/// Derives the public key for `secret` with the Montgomery ladder.
pub fn public_key(secret: &[u8; 32]) -> [u8; 32] {
    let mut e = clamp(*secret);
    let pk = montgomery::scalar_multiply(&BASE_POINT, &e);
    e.zeroize();
    pk
}

/// Derives the public key for `secret` through the Edwards fixed-base
/// multiplier and the birational map `u = (Z+Y)/(Z−Y)`.
///
/// Several times faster than the ladder thanks to the precomputed
/// base-point table. Valid **only** for the base point: a peer-supplied
/// u-coordinate need not correspond to a point of the Edwards subgroup,
/// so shared-secret derivation must stay on the ladder.
pub fn public_key_folded(secret: &[u8; 32]) -> [u8; 32] {
    let mut e = clamp(*secret);
    let mut q = base_point_multiply(&e);
    let u = (q.z + q.y) * (q.z - q.y).invert();
    let pk = u.to_bytes();

    e.zeroize();
    q.zeroize();
    pk
}

/// Derives the shared secret between `secret` and a peer's public key.
///
/// The peer's u-coordinate is deliberately not validated; X25519 is
/// defined over arbitrary u-coordinates and clamping already confines the
/// scalar to the safe range.
pub fn shared_secret(secret: &[u8; 32], peer_public: &[u8; 32]) -> [u8; 32] {
    let mut e = clamp(*secret);
    let shared = montgomery::scalar_multiply(peer_public, &e);
    e.zeroize();
    shared
}
