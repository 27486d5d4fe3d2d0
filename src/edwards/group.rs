//! Group operations on the Ed25519 twisted Edwards curve.
//!
//! The curve `−x² + y² = 1 + d·x²·y²` carries the prime-order subgroup
//! used by Ed25519 signatures. Several coordinate representations coexist,
//! each tuned to one role in scalar multiplication:
//!
//! - **`ExtPoint`** — extended projective `(X : Y : Z : T)` with
//!   `x = X/Z`, `y = Y/Z`, `T = X·Y/Z`. The working representation;
//!   complete addition and doubling without inversions.
//! - **`PrecompPoint`** — precomputed affine triple `(y+x, y−x, 2d·x·y)`
//!   with an implicit `Z = 1`. Backing store of the constant base-point
//!   tables; mixed addition costs 7M.
//! - **`CachedPoint`** — precomputed projective quadruple
//!   `(Y+X, Y−X, 2d·T, 2·Z)`. Built once from an extended point and
//!   reused for repeated additions; mixed addition costs 8M.
//! - **`AffinePoint`** — canonical `(x, y)`, produced exactly once per
//!   multiplication by the single field inversion at the end.
//!
//! The formulas follow the extended-coordinate system of Hisil et al.
//! (<http://eprint.iacr.org/2008/522>): doubling costs 4M + 4S + 7A and
//! the mixed additions share one shape that differs only in how the `D`
//! term is obtained. All formulas execute the same instruction sequence
//! for every input.
//!
//! Point decompression operates on public data only (signature `R` values
//! and public keys) and may branch; it is strict about canonical
//! encodings, rejecting `y ≥ p` and y-coordinates with no square root.

use crate::edwards::table::{D, D2, DI, SQRT_MINUS_ONE};
use crate::field::{FieldElement, P, sub4};

/// Group element in extended projective coordinates `(X : Y : Z : T)`.
#[derive(Clone, Copy, zeroize::Zeroize)]
pub struct ExtPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Precomputed affine form `(y+x, y−x, 2d·x·y)`, implicit `Z = 1`.
#[derive(Clone, Copy)]
pub(crate) struct PrecompPoint {
    pub(crate) ypx: FieldElement,
    pub(crate) ymx: FieldElement,
    pub(crate) t2d: FieldElement,
}

/// Precomputed projective form `(Y+X, Y−X, 2d·T, 2·Z)`.
#[derive(Clone, Copy, zeroize::Zeroize)]
pub(crate) struct CachedPoint {
    pub(crate) ypx: FieldElement,
    pub(crate) ymx: FieldElement,
    pub(crate) t2d: FieldElement,
    pub(crate) z2: FieldElement,
}

/// Affine point with canonical coordinates.
#[derive(Clone, Copy)]
pub(crate) struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl CachedPoint {
    /// The cached form of the neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = CachedPoint {
        ypx: FieldElement::ONE,
        ymx: FieldElement::ONE,
        t2d: FieldElement::ZERO,
        z2: FieldElement::from_word(2),
    };
}

impl ExtPoint {
    /// The neutral element `(0, 1, 1, 0)`.
    pub(crate) const IDENTITY: Self = ExtPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Point doubling, `P ← 2·P`. Cost 4M + 4S + 7A.
    pub(crate) fn double(&mut self) {
        let a = self.x.sq();
        let b = self.y.sq();
        let c = self.z.sq();
        let c = c + c;
        let d = -a;
        let h = d - b;
        let g = d + b;
        let f = g - c;
        let e = (self.x + self.y).sq() + h;

        self.x = e * f;
        self.y = h * g;
        self.z = g * f;
        self.t = e * h;
    }

    /// Mixed addition with a precomputed affine point. Cost 7M + 7A.
    pub(crate) fn add_precomp(&mut self, q: &PrecompPoint) {
        let a = (self.y - self.x) * q.ymx;
        let b = (self.y + self.x) * q.ypx;
        let c = self.t * q.t2d;
        let d = self.z + self.z;
        let e = b - a;
        let h = b + a;
        let f = d - c;
        let g = d + c;

        self.x = e * f;
        self.y = h * g;
        self.t = e * h;
        self.z = g * f;
    }

    /// Mixed addition with a precomputed projective point. Cost 8M + 6A.
    pub(crate) fn add_cached(&mut self, q: &CachedPoint) {
        let a = (self.y - self.x) * q.ymx;
        let b = (self.y + self.x) * q.ypx;
        let c = self.t * q.t2d;
        let d = self.z * q.z2;
        let e = b - a;
        let h = b + a;
        let f = d - c;
        let g = d + c;

        self.x = e * f;
        self.y = h * g;
        self.t = e * h;
        self.z = g * f;
    }

    /// Converts to the reusable precomputed projective form.
    pub(crate) fn to_cached(self) -> CachedPoint {
        CachedPoint {
            ypx: self.y + self.x,
            ymx: self.y - self.x,
            t2d: self.t * D2,
            z2: self.z + self.z,
        }
    }

    /// Seeds an accumulator from a precomputed affine point.
    ///
    /// The folding multiplier starts from a table entry instead of the
    /// identity, saving one addition. The triple is unscaled through
    /// `1/d` and carried at twice its size: `(2x : 2y : 2 : 2xy)`.
    pub(crate) fn from_precomp(q: &PrecompPoint) -> ExtPoint {
        ExtPoint {
            x: q.ypx - q.ymx,
            y: q.ypx + q.ymx,
            z: FieldElement::from_word(2),
            t: q.t2d * DI,
        }
    }

    /// Normalizes to affine coordinates with a single field inversion.
    pub(crate) fn to_affine(self) -> AffinePoint {
        let z_inv = self.z.invert();
        AffinePoint {
            x: (self.x * z_inv).reduce(),
            y: (self.y * z_inv).reduce(),
        }
    }

    /// Compresses this point to its 32-byte encoding.
    pub fn encode(&self) -> [u8; 32] {
        self.to_affine().encode()
    }

    /// Decompresses a point from its 32-byte encoding.
    ///
    /// Bytes 0..31 hold `y` little-endian; bit 7 of byte 31 is the parity
    /// of `x`. Recovery solves `x² = (y² − 1)/(d·y² + 1)` through the
    /// `(p−5)/8` chain, fixing the root up with `sqrt(−1)` when needed.
    ///
    /// Returns `None` for non-canonical `y` (`y ≥ p`), for y-coordinates
    /// off the curve (no square root), and for the non-canonical encoding
    /// of a zero `x` with the sign bit set.
    pub fn decode(input: &[u8; 32]) -> Option<ExtPoint> {
        let parity = input[31] >> 7;
        let mut y_bytes = *input;
        y_bytes[31] &= 0x7F;

        // the masked load is below 2^255; canonical means strictly below p
        let y = FieldElement::from_bytes(&y_bytes);
        if sub4(&y.0, &P).1 == 0 {
            return None;
        }

        let u = y.sq() - FieldElement::ONE;
        let v = y.sq() * D + FieldElement::ONE;

        // sqrt(u/v) = u·v³ · (u·v⁷)^((p−5)/8)
        let v3 = v.sq() * v;
        let a = u * v3;
        let b = (a * v.sq() * v.sq()).pow2523();
        let mut x = a * b;

        let check = (x.sq() * v - u).reduce();
        if !check.is_zero() {
            let flipped = (x.sq() * v + u).reduce();
            if !flipped.is_zero() {
                return None;
            }
            x = x * SQRT_MINUS_ONE;
        }

        let mut x = x.reduce();
        if x.is_odd() != (parity == 1) {
            if x.is_zero() {
                return None;
            }
            x = FieldElement(sub4(&P, &x.0).0);
        }

        let t = (x * y).reduce();
        Some(ExtPoint {
            x,
            y,
            z: FieldElement::ONE,
            t,
        })
    }
}

impl AffinePoint {
    /// Compresses to 32 bytes: canonical little-endian `y` with the
    /// parity of `x` in the top bit.
    pub(crate) fn encode(&self) -> [u8; 32] {
        let mut out = self.y.to_bytes();
        out[31] |= (self.x.is_odd() as u8) << 7;
        out
    }
}
