//! X25519 key agreement.
//!
//! Diffie–Hellman over Curve25519 as specified in RFC 7748: secret keys
//! are clamped 32-byte scalars, public keys and shared secrets are
//! 32-byte little-endian u-coordinates.
//!
//! Two public-key derivations are provided. The contractual path runs the
//! Montgomery ladder; the folded path reuses the Ed25519 fixed-base table
//! and converts back through the birational map, which is only sound for
//! the base point. Shared-secret derivation always uses the ladder.

mod core;

pub use self::core::*;
