//! Scalar arithmetic modulo the base-point order.
//!
//! This module implements arithmetic in the ring of integers modulo
//!
//! ```text
//! ℓ = 2²⁵² + 27742317777372353535851937790883648493
//! ```
//!
//! the order of the prime-order subgroup generated by the Ed25519 base
//! point. Scalars drive every multiplication of the base point: private
//! keys, deterministic nonces, challenge digests and blinding masks all
//! live in this ring.
//!
//! ## Representation
//!
//! Scalars are four 64-bit little-endian limbs. Unlike the field prime,
//! `ℓ` has no exploitable shape, so reduction uses Montgomery arithmetic
//! with `R = 2²⁵⁶`:
//!
//! - `mont_mul(x, y) = x·y·R⁻¹ mod ℓ` via word-by-word CIOS with the
//!   precomputed constant `−ℓ⁻¹ mod 2⁶⁴`,
//! - conversion in and out of Montgomery form through `R² mod ℓ`,
//! - a 16-entry table of the multiples `n·ℓ` for `n ∈ {0..15}`, which
//!   canonicalizes any 256-bit value with one subtraction selected by the
//!   value's high nibble plus one compensating addition.
//!
//! Montgomery form is used strictly internally; every scalar visible to
//! callers or written to the wire is a canonical little-endian integer
//! below `ℓ`.
//!
//! ## Constant-time behavior
//!
//! The multiplier, the digest reduction and the canonicalization contain
//! no secret-dependent branches; the `n·ℓ` selection is an index into a
//! public table derived from the value's top four bits, mirrored by an
//! unconditional compensating addition. The Fermat inversion walks a fixed
//! public exponent.

use std::ops::{Add, Mul};

use zeroize::Zeroize;

use crate::field::{add4, sub4, word_mul_add4};

/// `n·ℓ` for `n ∈ {0..15}`; entry 1 is the base-point order itself and
/// entry 15 is the largest multiple of `ℓ` that fits in 256 bits.
pub(crate) const NX_BPO: [[u64; 4]; 16] = [
    [0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000],
    [0x5812631A5CF5D3ED, 0x14DEF9DEA2F79CD6, 0x0000000000000000, 0x1000000000000000],
    [0xB024C634B9EBA7DA, 0x29BDF3BD45EF39AC, 0x0000000000000000, 0x2000000000000000],
    [0x0837294F16E17BC7, 0x3E9CED9BE8E6D683, 0x0000000000000000, 0x3000000000000000],
    [0x60498C6973D74FB4, 0x537BE77A8BDE7359, 0x0000000000000000, 0x4000000000000000],
    [0xB85BEF83D0CD23A1, 0x685AE1592ED6102F, 0x0000000000000000, 0x5000000000000000],
    [0x106E529E2DC2F78E, 0x7D39DB37D1CDAD06, 0x0000000000000000, 0x6000000000000000],
    [0x6880B5B88AB8CB7B, 0x9218D51674C549DC, 0x0000000000000000, 0x7000000000000000],
    [0xC09318D2E7AE9F68, 0xA6F7CEF517BCE6B2, 0x0000000000000000, 0x8000000000000000],
    [0x18A57BED44A47355, 0xBBD6C8D3BAB48389, 0x0000000000000000, 0x9000000000000000],
    [0x70B7DF07A19A4742, 0xD0B5C2B25DAC205F, 0x0000000000000000, 0xA000000000000000],
    [0xC8CA4221FE901B2F, 0xE594BC9100A3BD35, 0x0000000000000000, 0xB000000000000000],
    [0x20DCA53C5B85EF1C, 0xFA73B66FA39B5A0C, 0x0000000000000000, 0xC000000000000000],
    [0x78EF0856B87BC309, 0x0F52B04E4692F6E2, 0x0000000000000001, 0xD000000000000000],
    [0xD1016B71157196F6, 0x2431AA2CE98A93B8, 0x0000000000000001, 0xE000000000000000],
    [0x2913CE8B72676AE3, 0x3910A40B8C82308F, 0x0000000000000001, 0xF000000000000000],
];

/// The base-point order `ℓ`.
pub(crate) const BPO: [u64; 4] = NX_BPO[1];

/// `15·ℓ`, used to absorb overflow words after Montgomery rounds.
const MAX_BPO: [u64; 4] = NX_BPO[15];

/// `R = 2²⁵⁶ mod ℓ`.
const R_MOD: [u64; 4] = [
    0xD6EC31748D98951D,
    0xC6EF5BF4737DCF70,
    0xFFFFFFFFFFFFFFFE,
    0x0FFFFFFFFFFFFFFF,
];

/// `R² mod ℓ`, the to-Montgomery conversion constant.
const R2: [u64; 4] = [
    0xA40611E3449C0F01,
    0xD00E1BA768859347,
    0xCEEC73D217F5BE65,
    0x0399411B7C309A3D,
];

/// `−ℓ⁻¹ mod 2⁶⁴`, the per-word CIOS constant.
const BPO_MINV: u64 = 0xD2B51DA312547E1B;

/// `ℓ − 2`, little-endian bytes; the Fermat inversion exponent.
const BPO_M2: [u8; 32] = [
    0xEB, 0xD3, 0xF5, 0x5C, 0x1A, 0x63, 0x12, 0x58, 0xD6, 0x9C, 0xF7, 0xA2, 0xDE, 0xF9, 0xDE,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// A scalar modulo the base-point order `ℓ`.
///
/// Constructors that consume external data (`from_bytes` excepted) return
/// canonical values; arithmetic results are canonical as well. The raw
/// word-level helpers used by the blinding path tolerate any 256-bit
/// input, since multiples of `ℓ` vanish under point multiplication.
#[derive(Clone, Copy, Zeroize)]
pub struct Scalar(pub(crate) [u64; 4]);

/// One CIOS limb step over the running five-word window: computes
/// `y + b·x` where `x` has four limbs, propagating into the fifth word.
/// Returns the new window and the overflow bit.
#[inline(always)]
fn word_mul_add5(y: &[u64; 5], b: u64, x: &[u64; 4]) -> ([u64; 5], u64) {
    let mut z = [0u64; 5];
    let mut carry = 0u64;
    for i in 0..4 {
        let t = (y[i] as u128) + (b as u128) * (x[i] as u128) + (carry as u128);
        z[i] = t as u64;
        carry = (t >> 64) as u64;
    }
    let t = (y[4] as u128) + (carry as u128);
    z[4] = t as u64;
    (z, (t >> 64) as u64)
}

/// `z = x·y·R⁻¹ mod ℓ` by coarsely-integrated operand scanning.
///
/// Each of the four rounds accumulates one limb of `x` against `y`, then
/// cancels the low word with a multiple of `ℓ` chosen through `−ℓ⁻¹`.
/// The overflow counter reaches at most 2; a subtractive fix-up with
/// `15·ℓ` absorbs it. The result is below `2²⁵⁶` but not necessarily
/// below `ℓ`.
fn mont_mul(x: &[u64; 4], y: &[u64; 4]) -> [u64; 4] {
    // round 0: window = x[0]·y
    let mut t = [0u64; 5];
    let mut extra;
    {
        let mut c = 0u64;
        for i in 0..4 {
            let v = (x[0] as u128) * (y[i] as u128) + (c as u128);
            t[i] = v as u64;
            c = (v >> 64) as u64;
        }
        t[4] = c;
    }
    let m = BPO_MINV.wrapping_mul(t[0]);
    let (t1, c) = word_mul_add5(&t, m, &BPO);
    t = t1;
    extra = c;
    for &xi in x.iter().skip(1) {
        // shift the window down one word and fold in the next limb of x
        let shifted = [t[1], t[2], t[3], t[4], extra];
        let (t1, c) = word_mul_add5(&shifted, xi, y);
        t = t1;
        extra = c;
        let m = BPO_MINV.wrapping_mul(t[0]);
        let (t1, c) = word_mul_add5(&t, m, &BPO);
        t = t1;
        extra += c;
    }
    let mut z = [t[1], t[2], t[3], t[4]];
    while extra != 0 {
        let (w, borrow) = sub4(&z, &MAX_BPO);
        z = w;
        extra -= borrow;
    }
    z
}

/// Folds `hi·2²⁵⁶` into a 256-bit value using `2²⁵⁶ ≡ R (mod ℓ)`.
///
/// Converges quickly because `R < 2²⁵³`: each pass shrinks the overflow
/// word by a factor of at least eight.
fn reduce_hi_word(mut z: [u64; 4], mut hi: u64) -> [u64; 4] {
    while hi != 0 {
        let (w, c) = word_mul_add4(&z, hi, &R_MOD);
        z = w;
        hi = c;
    }
    z
}

/// Canonicalizes a 256-bit value into `[0, ℓ)`.
///
/// The high nibble selects the multiple `n·ℓ` to subtract; a borrow is
/// compensated by adding back `ℓ` (table entry 1) or nothing (entry 0).
fn mod_bpo(z: [u64; 4]) -> [u64; 4] {
    let n = (z[3] >> 60) as usize;
    let (w, borrow) = sub4(&z, &NX_BPO[n]);
    add4(&w, &NX_BPO[borrow as usize]).0
}

/// `x + y mod ℓ` over raw words, without canonicalization.
///
/// Accepts any 256-bit operands; the blinding path feeds clamped secret
/// scalars (which exceed `ℓ`) through here before the folding multiplier.
pub(crate) fn add_reduce_words(x: &[u64; 4], y: &[u64; 4]) -> [u64; 4] {
    let (z, carry) = add4(x, y);
    reduce_hi_word(z, carry)
}

impl Scalar {
    pub(crate) const ONE: Self = Scalar([1, 0, 0, 0]);

    /// Loads a scalar from 32 little-endian bytes, as-is.
    ///
    /// No reduction is performed; use `reduce_512` for values that may
    /// exceed `ℓ`. Clamped secret scalars are deliberately kept unreduced,
    /// matching their use as full 256-bit multipliers.
    pub fn from_bytes(input: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::from_le_bytes(input[i * 8..i * 8 + 8].try_into().unwrap());
        }
        Scalar(limbs)
    }

    /// Serializes the scalar as 32 little-endian bytes.
    pub fn to_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            out[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Reduces a 64-byte little-endian digest modulo `ℓ`.
    ///
    /// The digest is split as `high·2²⁵⁶ + low`; since `2²⁵⁶ ≡ R (mod ℓ)`,
    /// the high half is carried across with one Montgomery multiplication
    /// by `R²` (yielding `high·R`) and added to the low half. This is the
    /// hash-to-scalar step of signing and verification, and is simpler and
    /// faster than a Barrett reduction.
    pub fn reduce_512(digest: &[u8; 64]) -> Self {
        let low = Scalar::from_bytes(digest[..32].try_into().unwrap());
        let high = Scalar::from_bytes(digest[32..].try_into().unwrap());
        let high_r = mont_mul(&high.0, &R2);
        Scalar(mod_bpo(add_reduce_words(&high_r, &low.0)))
    }

    /// Multiplicative inverse modulo `ℓ` by Fermat's little theorem,
    /// `self^(ℓ−2)`, evaluated with the Montgomery multiplier over the
    /// fixed public exponent.
    pub fn invert(&self) -> Self {
        let u = mont_mul(&self.0, &R2);
        let mut v = R_MOD; // 1 in Montgomery form
        for &e in BPO_M2.iter().rev() {
            for bit in (0..8).rev() {
                v = mont_mul(&v, &v);
                if (e >> bit) & 1 == 1 {
                    v = mont_mul(&v, &u);
                }
            }
        }
        // leave Montgomery form and canonicalize
        let mut z = mont_mul(&v, &Scalar::ONE.0);
        loop {
            let (w, borrow) = sub4(&z, &BPO);
            if borrow != 0 {
                break;
            }
            z = w;
        }
        Scalar(z)
    }
}

/// Scalar addition modulo `ℓ`, canonical output.
impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Scalar(mod_bpo(add_reduce_words(&self.0, &rhs.0)))
    }
}

/// Scalar multiplication modulo `ℓ`, canonical output.
///
/// Two Montgomery passes: the first carries `x` into Montgomery form, the
/// second multiplies by `y` while dropping back out of it.
impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let t = mont_mul(&self.0, &R2);
        let z = mont_mul(&rhs.0, &t);
        Scalar(mod_bpo(z))
    }
}
