//! Finite field arithmetic modulo `p = 2²⁵⁵ − 19`.
//!
//! This module implements arithmetic in the prime field shared by the
//! Curve25519 Montgomery curve and the Ed25519 twisted Edwards curve.
//!
//! ## Representation
//!
//! Field elements are held as four 64-bit little-endian limbs:
//!
//! ```text
//! value = limb[0] + limb[1]·2⁶⁴ + limb[2]·2¹²⁸ + limb[3]·2¹⁹²
//! ```
//!
//! The pseudo-Mersenne shape of the modulus makes reduction a cheap fold
//! instead of a division: `2²⁵⁶ ≡ 38 (mod p)`, so the high half of a
//! 512-bit product is multiplied by 38 and added back into the low half.
//!
//! ## Reduction discipline
//!
//! Arithmetic results are kept in `[0, 2²⁵⁶)` and are **not** canonical in
//! general; a value may exceed `p` by a small multiple. Deferred reduction
//! keeps addition chains cheap. Canonical form (`< p`) is produced only
//! where it is observable: byte export, comparisons, and parity extraction.
//!
//! ## Constant-time behavior
//!
//! Additions, subtractions, multiplications and the fixed exponentiation
//! chains contain no secret-dependent branches or memory accesses. The
//! trailing reduction loops run a data-dependent number of passes (at most
//! two), independent of which operand bits are set.

use std::ops::{Add, Mul, Neg, Sub};

use zeroize::Zeroize;

/// The field prime `p = 2²⁵⁵ − 19`.
pub(crate) const P: [u64; 4] = [
    0xFFFFFFFFFFFFFFED,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0x7FFFFFFFFFFFFFFF,
];

/// Largest multiple of `p` below `2²⁵⁶`, i.e. `2·p`.
///
/// Used to absorb borrows after subtraction and to negate values without
/// leaving the `[0, 2²⁵⁶)` range.
pub(crate) const MAX_P: [u64; 4] = [
    0xFFFFFFFFFFFFFFDA,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
];

/// Field element modulo `2²⁵⁵ − 19`, four 64-bit little-endian limbs.
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 4]);

#[inline(always)]
fn adc(x: u64, y: u64, carry: u64) -> (u64, u64) {
    let t = (x as u128) + (y as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

#[inline(always)]
fn sbb(x: u64, y: u64, borrow: u64) -> (u64, u64) {
    let t = (x as u128).wrapping_sub((y as u128) + (borrow as u128));
    (t as u64, ((t >> 64) as u64) & 1)
}

/// 256-bit addition, returning the carry word.
#[inline(always)]
pub(crate) fn add4(x: &[u64; 4], y: &[u64; 4]) -> ([u64; 4], u64) {
    let mut z = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (w, c) = adc(x[i], y[i], carry);
        z[i] = w;
        carry = c;
    }
    (z, carry)
}

/// 256-bit subtraction, returning the borrow (0 or 1).
#[inline(always)]
pub(crate) fn sub4(x: &[u64; 4], y: &[u64; 4]) -> ([u64; 4], u64) {
    let mut z = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (w, b) = sbb(x[i], y[i], borrow);
        z[i] = w;
        borrow = b;
    }
    (z, borrow)
}

/// Computes `y + b·x` over four limbs, returning the carry word.
///
/// The single-word multiplier `b` drives both the pseudo-Mersenne fold
/// (`b = 38`) and the curve constant multiplications (`b = 121665`).
#[inline(always)]
pub(crate) fn word_mul_add4(y: &[u64; 4], b: u64, x: &[u64; 4]) -> ([u64; 4], u64) {
    let mut z = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let t = (y[i] as u128) + (b as u128) * (x[i] as u128) + (carry as u128);
        z[i] = t as u64;
        carry = (t >> 64) as u64;
    }
    (z, carry)
}

/// Schoolbook 256×256 → 512-bit multiplication.
#[inline(always)]
fn mul_wide(x: &[u64; 4], y: &[u64; 4]) -> [u64; 8] {
    let mut t = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let acc = (x[i] as u128) * (y[j] as u128) + (t[i + j] as u128) + (carry as u128);
            t[i + j] = acc as u64;
            carry = (acc >> 64) as u64;
        }
        t[i + 4] = carry;
    }
    t
}

/// Folds a carry word back into the low 256 bits using `2²⁵⁶ ≡ 38 (mod p)`.
#[inline(always)]
fn fold_carry(z: &[u64; 4], carry: u64) -> ([u64; 4], u64) {
    let mut out = *z;
    let t = (out[0] as u128) + (carry as u128) * 38;
    out[0] = t as u64;
    let mut c = (t >> 64) as u64;
    for limb in out.iter_mut().skip(1) {
        let (w, cc) = adc(*limb, 0, c);
        *limb = w;
        c = cc;
    }
    (out, c)
}

#[inline]
fn cmp4(x: &[u64; 4], y: &[u64; 4]) -> core::cmp::Ordering {
    for i in (0..4).rev() {
        if x[i] != y[i] {
            return if x[i] > y[i] {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Less
            };
        }
    }
    core::cmp::Ordering::Equal
}

impl FieldElement {
    /// The additive identity.
    pub(crate) const ZERO: Self = FieldElement([0, 0, 0, 0]);

    /// The multiplicative identity.
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0]);

    /// Builds a field element from a small word value.
    #[inline(always)]
    pub(crate) const fn from_word(value: u64) -> Self {
        FieldElement([value, 0, 0, 0])
    }

    /// Decodes a field element from 32 little-endian bytes.
    ///
    /// The full 256-bit value is loaded as-is; no masking or reduction is
    /// performed here. Callers that need a canonical representative (for
    /// example point decoding) compare against `p` explicitly.
    pub fn from_bytes(input: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::from_le_bytes(input[i * 8..i * 8 + 8].try_into().unwrap());
        }
        FieldElement(limbs)
    }

    /// Encodes this field element into its canonical 32-byte form.
    ///
    /// The value is reduced to `[0, p)` before serialization, so the output
    /// is always the unique little-endian encoding required on the wire.
    pub fn to_bytes(self) -> [u8; 32] {
        let reduced = self.reduce();
        let mut out = [0u8; 32];
        for (i, limb) in reduced.0.iter().enumerate() {
            out[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Canonical reduction into `[0, p)`.
    ///
    /// The input is below `2²⁵⁶ = 2·p + 38`, so at most two subtractions
    /// of `p` are needed.
    pub(crate) fn reduce(self) -> Self {
        let mut z = self.0;
        while cmp4(&z, &P) != core::cmp::Ordering::Less {
            z = sub4(&z, &P).0;
        }
        FieldElement(z)
    }

    /// Returns `true` if the canonical representative is zero.
    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        let z = self.reduce().0;
        (z[0] | z[1] | z[2] | z[3]) == 0
    }

    /// Parity of the canonical representative.
    ///
    /// In the Ed25519 encoding the sign of a coordinate is its least
    /// significant bit. Callers pass values that are already canonical
    /// (affine coordinates produced by `reduce`); the extra reduction here
    /// is then a no-op.
    #[inline]
    pub(crate) fn is_odd(&self) -> bool {
        (self.reduce().0[0] & 1) == 1
    }

    /// Computes `y + b·x (mod p)` with a single-word multiplier `b`.
    ///
    /// This is the word-scaled accumulate used by the Montgomery ladder
    /// (`b = 121665`); the result stays below `2²⁵⁶`.
    pub(crate) fn word_mul_add(y: &Self, b: u64, x: &Self) -> Self {
        let (mut z, mut carry) = word_mul_add4(&y.0, b, &x.0);
        while carry != 0 {
            let (w, c) = fold_carry(&z, carry);
            z = w;
            carry = c;
        }
        FieldElement(z)
    }

    /// Squaring, `self² (mod p)`.
    ///
    /// Shares the multiplication code path; the operand pattern of a square
    /// is not exploited separately.
    #[inline(always)]
    pub(crate) fn sq(self) -> Self {
        self * self
    }

    /// Applies `n` successive squarings followed by a multiplication by `y`.
    ///
    /// Building block for the fixed exponentiation chains below; the shape
    /// of each chain depends only on the exponent, never on the operand.
    fn sq_mul(self, n: usize, y: Self) -> Self {
        let mut t = self.sq();
        for _ in 1..n {
            t = t.sq();
        }
        t * y
    }

    /// Computes `self^((p−5)/8) = self^(2²⁵² − 3) (mod p)`.
    ///
    /// This fixed chain is the square-root workhorse of Ed25519 point
    /// decoding: for `u/v` a square, `x = u·v³·(u·v⁷)^((p−5)/8)` recovers
    /// a root up to a factor of `sqrt(−1)`.
    pub(crate) fn pow2523(self) -> Self {
        let x2 = self.sq(); // 2
        let x9 = x2.sq_mul(2, self); // 9
        let x11 = x9 * x2; // 11
        let x5 = x11.sq_mul(1, x9); // 2^5 - 2^0 = 31
        let x10 = x5.sq_mul(5, x5); // 2^10 - 2^0
        let x20 = x10.sq_mul(10, x10); // 2^20 - 2^0
        let x40 = x20.sq_mul(20, x20); // 2^40 - 2^0
        let x50 = x40.sq_mul(10, x10); // 2^50 - 2^0
        let x100 = x50.sq_mul(50, x50); // 2^100 - 2^0
        let t = x100.sq_mul(100, x100); // 2^200 - 2^0
        let t = t.sq_mul(50, x50); // 2^250 - 2^0
        t.sq().sq_mul(1, self) // 2^252 - 3
    }

    /// Multiplicative inverse, `self⁻¹ (mod p)`.
    ///
    /// Uses the 254-squaring addition chain (courtesy of DJB) rather than a
    /// generic `x^(p−2)` ladder; the chain shape is fixed, so the inversion
    /// is constant-time. An input of zero yields zero.
    pub fn invert(self) -> Self {
        let z2 = self.sq(); // 2
        let t1 = z2.sq(); // 4
        let t0 = t1.sq(); // 8
        let z9 = t0 * self; // 9
        let z11 = z9 * z2; // 11
        let t0 = z11.sq(); // 22
        let z2_5_0 = t0 * z9; // 2^5 - 2^0 = 31

        let z2_10_0 = z2_5_0.sq_mul(5, z2_5_0); // 2^10 - 2^0
        let z2_20_0 = z2_10_0.sq_mul(10, z2_10_0); // 2^20 - 2^0
        let t0 = z2_20_0.sq_mul(20, z2_20_0); // 2^40 - 2^0
        let z2_50_0 = t0.sq_mul(10, z2_10_0); // 2^50 - 2^0
        let z2_100_0 = z2_50_0.sq_mul(50, z2_50_0); // 2^100 - 2^0
        let t0 = z2_100_0.sq_mul(100, z2_100_0); // 2^200 - 2^0
        let t0 = t0.sq_mul(50, z2_50_0); // 2^250 - 2^0

        // 2^255 - 2^5, then 2^255 - 21
        t0.sq().sq().sq().sq().sq_mul(1, z11)
    }

    /// Constant-time conditional swap of two field elements.
    ///
    /// If `condition == 1`, swaps `self` and `rhs`; if `condition == 0`,
    /// does nothing. Branch-free, safe for secret selection bits.
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u64) {
        let mask = condition.wrapping_neg();
        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let tmp = (*s ^ *r) & mask;
            *s ^= tmp;
            *r ^= tmp;
        }
    }
}

/// Field addition.
///
/// The 256-bit sum may carry out; the carry is folded back through
/// `2²⁵⁶ ≡ 38 (mod p)`. The result stays in `[0, 2²⁵⁶)` and is not
/// guaranteed canonical.
impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (mut z, mut carry) = add4(&self.0, &rhs.0);
        while carry != 0 {
            let (w, c) = fold_carry(&z, carry);
            z = w;
            carry = c;
        }
        FieldElement(z)
    }
}

/// Field subtraction.
///
/// A borrow is absorbed by adding back `2·p`, keeping the result
/// non-negative without producing a canonical representative.
impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let (mut z, mut borrow) = sub4(&self.0, &rhs.0);
        while borrow != 0 {
            let (w, carry) = add4(&z, &MAX_P);
            z = w;
            borrow -= carry;
        }
        FieldElement(z)
    }
}

/// Field multiplication.
///
/// A full 512-bit product is folded in one pass: the high 256-bit half is
/// scaled by 38 and accumulated onto the low half, and any remaining carry
/// word is folded the same way until it vanishes (at most twice).
impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let t = mul_wide(&self.0, &rhs.0);
        let low = [t[0], t[1], t[2], t[3]];
        let high = [t[4], t[5], t[6], t[7]];
        let (mut z, mut carry) = word_mul_add4(&low, 38, &high);
        while carry != 0 {
            let (w, c) = fold_carry(&z, carry);
            z = w;
            carry = c;
        }
        FieldElement(z)
    }
}

/// Field negation, computed as `2·p − self`.
///
/// Subtracting from the largest 256-bit multiple of `p` avoids a borrow for
/// any operand below `2²⁵⁶ − 38`, and the subtraction path absorbs the rare
/// borrow otherwise.
impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement(MAX_P) - self
    }
}
