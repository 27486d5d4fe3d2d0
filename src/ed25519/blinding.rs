//! Additive blinding of fixed-base scalar multiplications.
//!
//! Even branch-free code leaks: operand values drive power, EM and
//! micro-architectural state, and the folding multiplier's table indexes
//! derive from the scalar. Blinding randomizes the operand instead of the
//! control flow. A context holds a masking scalar `bl` (stored as
//! `ℓ − bl`, so applying the mask is one addition) and the precomputed
//! point `bl·B`:
//!
//! ```text
//! k' = k + (ℓ − bl) mod ℓ
//! R  = k'·B + bl·B = k·B
//! ```
//!
//! The arithmetic only ever sees `k'`, which is independent of `k`, and
//! the result is mathematically identical to the unblinded product.
//!
//! Creating a context needs `bl·B` for a fresh secret `bl` — itself a
//! fixed-base multiplication by a secret. The chicken-and-egg is broken
//! by a constant blinding pair generated at distribution time and baked
//! into the library, under which every runtime `bl` is computed.
//!
//! A context is read-only after creation and may be shared across threads
//! and reused for any number of signing and key-generation operations.
//! Re-randomization is explicit: drop the context (its memory is wiped)
//! and create a new one.

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::edwards::group::{AffinePoint, CachedPoint};
use crate::edwards::mul::base_point_mult;
use crate::edwards::table::CUSTOM_BLINDING;
use crate::field::sub4;
use crate::scalar::{BPO, Scalar, add_reduce_words};

/// A reusable blinding context: `ℓ − bl` and `bl·B`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Blinding {
    bl: [u64; 4],
    bp: CachedPoint,
}

impl Blinding {
    /// Builds a blinding context from 64 random bytes.
    ///
    /// The seed is reduced to the masking scalar with the same 512-bit
    /// reduction used for digests, and `bl·B` is computed under the baked
    /// distribution constant so the fresh scalar never multiplies the
    /// base point unmasked.
    pub fn new(seed: &[u8; 64]) -> Blinding {
        let mut bl = Scalar::reduce_512(seed);

        let mut masked = add_reduce_words(&bl.0, &CUSTOM_BLINDING.bl);
        let mut point = base_point_mult(&masked);
        point.add_cached(&CUSTOM_BLINDING.bp);
        let bp = point.to_cached();

        let stored = sub4(&BPO, &bl.0).0;
        bl.zeroize();
        masked.zeroize();
        point.zeroize();

        Blinding { bl: stored, bp }
    }

    /// Builds a blinding context from the caller's RNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Blinding {
        let mut seed = [0u8; 64];
        rng.fill_bytes(&mut seed);
        let ctx = Blinding::new(&seed);
        seed.zeroize();
        ctx
    }
}

/// Computes `sk·B` as an affine point, masked when a context is given.
///
/// The multiplier is taken as a full 256-bit little-endian value; clamped
/// secrets and digest-derived nonces both pass through unreduced.
pub(crate) fn blinded_base_mult(sk: &[u8; 32], blinding: Option<&Blinding>) -> AffinePoint {
    let mut words = [0u64; 4];
    for (i, w) in words.iter_mut().enumerate() {
        *w = u64::from_le_bytes(sk[i * 8..i * 8 + 8].try_into().unwrap());
    }

    let mut point = match blinding {
        Some(ctx) => {
            let mut masked = add_reduce_words(&words, &ctx.bl);
            let mut s = base_point_mult(&masked);
            s.add_cached(&ctx.bp);
            masked.zeroize();
            s
        }
        None => base_point_mult(&words),
    };

    let affine = point.to_affine();
    words.zeroize();
    point.zeroize();
    affine
}
