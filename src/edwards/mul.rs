//! Scalar multiplication strategies for the Edwards curve.
//!
//! ## Folding
//!
//! The fixed-base multiplier breaks the 256-bit scalar into four 64-bit
//! limbs and rewrites
//!
//! ```text
//! a·B = Σ aⱼ·2^(64·j)·B        j = 0,1,2,3
//! ```
//!
//! The sixteen subset sums of `{B, 2⁶⁴·B, 2¹²⁸·B, 2¹⁹²·B}` are baked into
//! the constant table, so gathering one bit from each limb at a common
//! position yields a 4-bit table index, and the whole multiplication is 64
//! double-and-add steps (the first add is a free table load). Every scalar
//! drives the identical sequence of doublings and additions; the only
//! data-dependence is the table index, which secret-scalar callers cover
//! with additive blinding.
//!
//! ## Dual multiplication
//!
//! Signature verification needs `s·B + h·(−A)` for public `s`, `h` and
//! `A`. The same bit-gathering runs against two tables at once: the fixed
//! base-point table and a 16-entry subset-sum table built per public key,
//! giving 64 steps of one doubling and two mixed additions.

use crate::edwards::group::{AffinePoint, CachedPoint, ExtPoint};
use crate::edwards::table::BASE_FOLDING;

/// Gathers bit `j` of each scalar limb into the 4-bit fold indexes.
fn fold4(words: &[u64; 4]) -> [u8; 64] {
    let mut cut = [0u8; 64];
    for (j, c) in cut.iter_mut().enumerate() {
        *c = (((words[0] >> j) & 1)
            | ((words[1] >> j) & 1) << 1
            | ((words[2] >> j) & 1) << 2
            | ((words[3] >> j) & 1) << 3) as u8;
    }
    cut
}

/// Returns `a·B` in extended coordinates for a full 256-bit multiplier.
///
/// Runs all 64 positions unconditionally; multiples of the group order
/// vanish, so blinded multipliers and unclamped values are welcome.
pub(crate) fn base_point_mult(words: &[u64; 4]) -> ExtPoint {
    let cut = fold4(words);
    let mut s = ExtPoint::from_precomp(&BASE_FOLDING[cut[63] as usize]);
    for j in (0..63).rev() {
        s.double();
        s.add_precomp(&BASE_FOLDING[cut[j] as usize]);
    }
    s
}

/// Returns `sk·B` for a little-endian 256-bit multiplier.
///
/// Thin byte-level wrapper over the folding multiplier; secret-scalar
/// callers go through the blinded path in `ed25519` instead.
pub fn base_point_multiply(sk: &[u8; 32]) -> ExtPoint {
    let mut words = [0u64; 4];
    for (i, w) in words.iter_mut().enumerate() {
        *w = u64::from_le_bytes(sk[i * 8..i * 8 + 8].try_into().unwrap());
    }
    base_point_mult(&words)
}

/// The 4-bit index over bytes `n, n+8, n+16, n+24` at bit `b`.
#[inline(always)]
fn bmask(v: u32, b: usize) -> usize {
    (((v >> b) & 1) | ((v >> (b + 7)) & 2) | ((v >> (b + 14)) & 4) | ((v >> (b + 21)) & 8))
        as usize
}

/// Computes `a·B + b·Q` where `B` is the base point and `Q` is described
/// by its 16-entry subset-sum table. Both scalars are little-endian byte
/// strings; verification passes public values only.
pub(crate) fn dual_mult(a: &[u8; 32], b: &[u8; 32], q_table: &[CachedPoint; 16]) -> AffinePoint {
    let mut s = ExtPoint::IDENTITY;
    for i in (0..8).rev() {
        let x = (a[i] as u32)
            | (a[i + 8] as u32) << 8
            | (a[i + 16] as u32) << 16
            | (a[i + 24] as u32) << 24;
        let y = (b[i] as u32)
            | (b[i + 8] as u32) << 8
            | (b[i + 16] as u32) << 16
            | (b[i + 24] as u32) << 24;
        for bit in (0..8).rev() {
            s.double();
            s.add_precomp(&BASE_FOLDING[bmask(x, bit)]);
            s.add_cached(&q_table[bmask(y, bit)]);
        }
    }
    s.to_affine()
}
