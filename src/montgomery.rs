//! X-only scalar multiplication on the Curve25519 Montgomery curve.
//!
//! The curve is `y² = x³ + 486662·x² + x` over the field of `2²⁵⁵ − 19`,
//! with base point `x = 9`. Points travel as compressed x-coordinates, so
//! scalar multiplication uses the Montgomery ladder over projective
//! `(X : Z)` pairs; the affine coordinate is `x = X/Z`.
//!
//! ## Ladder discipline
//!
//! Implementations that select ladder operands with if/else logic are
//! prone to side-channel attacks: the conditional jump leaks through
//! branch prediction, cache and instruction-queue effects even when both
//! arms perform the same arithmetic. Here the two working points are
//! exchanged with a masked constant-time swap around a single combined
//! "differential add + double" step, so the instruction stream is
//! identical for either key bit.
//!
//! The ladder starts from the most significant set bit of the scalar.
//! Clamped secret scalars always have bit 254 set and bit 255 clear, so
//! for secrets the iteration count is a fixed 255 steps; the scan only
//! varies for public scalars such as the order checks in the test-suite.

use zeroize::Zeroize;

use crate::field::FieldElement;

/// The x-coordinate of the Curve25519 base point.
pub const BASE_POINT: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0,
];

/// `(486662 − 2) / 4`, the doubling constant of the Montgomery curve.
const A24: u64 = 121665;

/// X-only projective point, `x = X/Z`.
#[derive(Clone, Copy, Zeroize)]
struct XzPoint {
    x: FieldElement,
    z: FieldElement,
}

impl XzPoint {
    /// Point doubling.
    ///
    /// ```text
    /// x2 = (x+z)²·(x−z)²
    /// z2 = ((x+z)² − (x−z)²)·((x+z)² + 121665·((x+z)² − (x−z)²))
    /// ```
    fn double(&self) -> XzPoint {
        let a = (self.x + self.z).sq();
        let b = (self.x - self.z).sq();
        let x2 = a * b;
        let b = a - b;
        let a = FieldElement::word_mul_add(&a, A24, &b);
        XzPoint { x: x2, z: a * b }
    }
}

/// One ladder rung: `p ← p + q`, `q ← 2·q`.
///
/// The differential add relies on `p − q` being the base point, whose
/// x-coordinate enters as `base`:
///
/// ```text
/// x3 = ((x1−z1)(x2+z2) + (x1+z1)(x2−z2))²          (zb = 1)
/// z3 = ((x1−z1)(x2+z2) − (x1+z1)(x2−z2))²·xb       (xb = base)
/// ```
fn ladder_step(p: &mut XzPoint, q: &mut XzPoint, base: &FieldElement) {
    let a = p.x - p.z;
    let b = p.x + p.z;
    let c = q.x - q.z;
    let d = q.x + q.z;
    let a = a * d;
    let b = b * c;
    let e = a + b;
    let b = a - b;
    p.x = e.sq();
    let a = b.sq();
    p.z = a * *base;

    let a = d.sq();
    let b = c.sq();
    q.x = a * b;
    let b = a - b;
    let a = FieldElement::word_mul_add(&a, A24, &b);
    q.z = a * b;
}

#[inline(always)]
fn bit(scalar: &[u8; 32], index: usize) -> u64 {
    ((scalar[index >> 3] >> (index & 7)) & 1) as u64
}

/// Returns `k·P` for the point with x-coordinate `point` and the
/// little-endian scalar `k`, as the encoded affine x-coordinate.
///
/// The scalar is used verbatim: no clamping, no reduction modulo the
/// group order. A zero scalar yields the all-zero encoding. The point is
/// not validated as lying on the curve; the X25519 contract operates on
/// arbitrary u-coordinates.
pub fn scalar_multiply(point: &[u8; 32], scalar: &[u8; 32]) -> [u8; 32] {
    let mut top = None;
    for i in (0..256).rev() {
        if bit(scalar, i) == 1 {
            top = Some(i);
            break;
        }
    }
    let Some(top) = top else {
        return [0u8; 32];
    };

    let base = FieldElement::from_bytes(point);
    // P = 1·P, Q = 2·P; the pair stays (k·P, (k+1)·P) for the bits seen so far
    let mut p = XzPoint {
        x: base,
        z: FieldElement::ONE,
    };
    let mut q = p.double();

    for i in (0..top).rev() {
        // bit 1: P ← P+Q, Q ← 2Q.  bit 0: the roles are exchanged, so a
        // masked swap on both sides of the step keeps the instruction
        // stream identical for either bit value.
        let exchange = bit(scalar, i) ^ 1;
        p.x.swap(&mut q.x, exchange);
        p.z.swap(&mut q.z, exchange);
        ladder_step(&mut p, &mut q, &base);
        p.x.swap(&mut q.x, exchange);
        p.z.swap(&mut q.z, exchange);
    }

    let z_inv = p.z.invert();
    let out = (p.x * z_inv).to_bytes();
    p.zeroize();
    q.zeroize();
    out
}
