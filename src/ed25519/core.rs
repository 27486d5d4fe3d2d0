use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ed25519::blinding::{Blinding, blinded_base_mult};
use crate::ed25519::verify::VerifyContext;
use crate::scalar::Scalar;

/// An Ed25519 public key: 32 bytes, little-endian `y` with the parity of
/// `x` in the top bit.
#[derive(Clone, Copy)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// An Ed25519 private key: the 32-byte seed followed by the derived
/// public key. The seed is the only secret; it is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    seed: [u8; 32],
    public: [u8; 32],
}

impl PrivateKey {
    /// Loads a stored private key (`seed ‖ public_key`).
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        PrivateKey {
            seed: bytes[..32].try_into().unwrap(),
            public: bytes[32..].try_into().unwrap(),
        }
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.seed);
        out[32..].copy_from_slice(&self.public);
        out
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.public)
    }
}

/// An Ed25519 signature: the encoded point `R` followed by the canonical
/// scalar `s`.
#[derive(Clone, Copy)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Signature(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

/// Derives the key pair for a 32-byte seed.
///
/// `H(seed)` splits into the clamped scalar half `a` and the nonce half;
/// the public key is `a·B`. The private key keeps the seed, not the
/// scalar, so signing re-derives both halves.
pub fn keypair(seed: &[u8; 32], blinding: Option<&Blinding>) -> (PublicKey, PrivateKey) {
    let mut md = [0u8; 64];
    md.copy_from_slice(&Sha512::digest(seed));
    md[0] &= 0xF8;
    md[31] = (md[31] | 0x40) & 0x7F;

    let a: [u8; 32] = md[..32].try_into().unwrap();
    let pk = blinded_base_mult(&a, blinding).encode();
    md.zeroize();

    (
        PublicKey(pk),
        PrivateKey {
            seed: *seed,
            public: pk,
        },
    )
}

/// Derives a key pair from a seed sampled off the caller's RNG.
pub fn generate_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
    blinding: Option<&Blinding>,
) -> (PublicKey, PrivateKey) {
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);
    let pair = keypair(&seed, blinding);
    seed.zeroize();
    pair
}

/// Signs `message` under `private`, optionally masking the two fixed-base
/// multiplications with a blinding context.
///
/// Deterministic per RFC 8032:
///
/// ```text
/// r = H(b ‖ m) mod ℓ        R = r·B
/// h = H(R ‖ A ‖ m) mod ℓ    s = r + h·a mod ℓ
/// ```
///
/// The message is hashed twice, once into the nonce and once into the
/// challenge; the scheme's structure rules out a one-pass signer.
/// Blinding changes intermediate operands only, never the signature.
pub fn sign(private: &PrivateKey, blinding: Option<&Blinding>, message: &[u8]) -> Signature {
    let mut md = [0u8; 64];
    md.copy_from_slice(&Sha512::digest(private.seed));
    md[0] &= 0xF8;
    md[31] = (md[31] | 0x40) & 0x7F;
    let mut a = Scalar::from_bytes(md[..32].try_into().unwrap());

    let mut hash = Sha512::new();
    hash.update(&md[32..]);
    hash.update(message);
    let mut r_digest = [0u8; 64];
    r_digest.copy_from_slice(&hash.finalize());
    let mut r = Scalar::reduce_512(&r_digest);

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&blinded_base_mult(&r.to_bytes(), blinding).encode());

    let mut hash = Sha512::new();
    hash.update(&sig[..32]);
    hash.update(private.public);
    hash.update(message);
    let mut h_digest = [0u8; 64];
    h_digest.copy_from_slice(&hash.finalize());
    let h = Scalar::reduce_512(&h_digest);

    let s = h * a + r;
    sig[32..].copy_from_slice(&s.to_bytes());

    md.zeroize();
    r_digest.zeroize();
    a.zeroize();
    r.zeroize();

    Signature(sig)
}

/// Verifies `signature` over `message` under `public`.
///
/// Returns `false` for an invalid point encoding, a non-canonical `s`, or
/// a mismatched `R`; no failure mode is distinguished from another.
pub fn verify(signature: &Signature, public: &PublicKey, message: &[u8]) -> bool {
    match VerifyContext::new(public) {
        Some(ctx) => ctx.check(signature, message),
        None => false,
    }
}
