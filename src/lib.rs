//! Curve25519 key agreement and Ed25519 signatures.
//!
//! This crate implements the two Curve25519-based primitives from
//! scratch: X25519 Diffie–Hellman key agreement (RFC 7748) and Ed25519
//! digital signatures (RFC 8032).
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than on a large high-level API. All operations on secret data execute
//! in constant time, and every fixed-base multiplication of a secret
//! scalar can additionally be masked with additive blinding for
//! side-channel resistance.
//!
//! # Module overview
//!
//! - `field`
//!   Arithmetic in the prime field of `2²⁵⁵ − 19` on four 64-bit limbs,
//!   with the cheap pseudo-Mersenne fold taking the place of division.
//!
//! - `scalar`
//!   Arithmetic modulo the base-point order `ℓ` via Montgomery
//!   multiplication, including the 512-bit digest reduction that turns
//!   hashes into scalars.
//!
//! - `montgomery`
//!   The X-only Montgomery ladder: constant-time scalar multiplication
//!   on compressed x-coordinates.
//!
//! - `edwards`
//!   The twisted Edwards group law in extended coordinates, the folding
//!   fixed-base multiplier over the precomputed base-point table, and
//!   the dual multiplier behind signature verification.
//!
//! - `x25519`
//!   Public-key and shared-secret derivation.
//!
//! - `ed25519`
//!   Key pairs, deterministic signing, verification, blinding contexts
//!   and reusable verification contexts.
//!
//! # External collaborators
//!
//! SHA-512 comes from the `sha2` crate; randomness is always supplied by
//! the caller through `rand_core` generators. The crate itself opens no
//! files, reads no OS entropy and spawns nothing: apart from the
//! compile-time tables, all state lives in caller-owned keys and
//! contexts, and secret intermediates are wiped before returning.
//!
//! # Design goals
//!
//! - No secret-dependent branches or memory addressing
//! - No heap allocation in the arithmetic core
//! - Minimal and explicit APIs with owned, fixed-size values
//! - Stable, well-defined semantics matching the RFCs

mod ct;

pub mod ed25519;
pub mod edwards;
pub mod field;
pub mod montgomery;
pub mod scalar;
pub mod x25519;
