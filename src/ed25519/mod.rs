//! Ed25519 digital signatures.
//!
//! RFC 8032 signatures over the twisted Edwards form of Curve25519:
//!
//! - `core` — key material, deterministic signing and verification;
//! - `blinding` — additive masking of the secret-scalar multiplications;
//! - `verify` — reusable per-key verification contexts.
//!
//! Key material follows the reference layout: a 32-byte seed is hashed
//! into a clamped scalar half and a nonce half, the stored private key is
//! `seed ‖ public_key`, and signatures are `R ‖ s` (64 bytes).
//!
//! Verification against one public key can amortize its precomputation:
//! build a [`VerifyContext`] once and call [`VerifyContext::check`] per
//! signature. The one-shot [`verify`] builds the context internally.

mod blinding;
mod core;
mod verify;

pub use self::core::*;
pub use blinding::Blinding;
pub use verify::VerifyContext;
