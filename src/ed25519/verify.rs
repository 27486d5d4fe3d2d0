//! Signature verification contexts.
//!
//! Checking a signature evaluates `s·B + h·(−A)` for the signer's public
//! point `A`. The dual multiplier wants `−A` as a 16-entry subset-sum
//! table of `{−A, 2⁶⁴·(−A), 2¹²⁸·(−A), 2¹⁹²·(−A)}`; building that table
//! costs 192 doublings and a handful of additions, which amortizes over
//! every signature checked against the same key.

use sha2::{Digest, Sha512};

use crate::ct::ConstantTimeEq;
use crate::ed25519::core::{PublicKey, Signature};
use crate::edwards::group::{CachedPoint, ExtPoint};
use crate::edwards::mul::dual_mult;
use crate::field::sub4;
use crate::scalar::{BPO, Scalar};

/// Precomputed state for checking signatures under one public key.
pub struct VerifyContext {
    pk: [u8; 32],
    q_table: [CachedPoint; 16],
}

impl VerifyContext {
    /// Decodes the public key and builds the negated subset-sum table.
    ///
    /// Returns `None` when the key bytes are not a valid point encoding;
    /// `verify` maps that case to a plain rejection, as RFC 8032 intends.
    pub fn new(public: &PublicKey) -> Option<VerifyContext> {
        let mut q = ExtPoint::decode(&public.to_bytes())?;
        // the dual multiply adds h·(−A)
        q.x = -q.x;
        q.t = -q.t;

        let mut table = [CachedPoint::IDENTITY; 16];
        table[1] = q.to_cached();

        for _ in 0..64 {
            q.double();
        }
        table[2] = q.to_cached();
        table[3] = extend(&q, &table, 1);

        for _ in 0..64 {
            q.double();
        }
        table[4] = q.to_cached();
        table[5] = extend(&q, &table, 1);
        table[6] = extend(&q, &table, 2);
        table[7] = extend(&q, &table, 3);

        for _ in 0..64 {
            q.double();
        }
        table[8] = q.to_cached();
        table[9] = extend(&q, &table, 1);
        table[10] = extend(&q, &table, 2);
        table[11] = extend(&q, &table, 3);
        table[12] = extend(&q, &table, 4);
        table[13] = extend(&q, &table, 5);
        table[14] = extend(&q, &table, 6);
        table[15] = extend(&q, &table, 7);

        Some(VerifyContext {
            pk: public.to_bytes(),
            q_table: table,
        })
    }

    /// Checks one signature over `message` against this context's key.
    ///
    /// The signature verifies iff `s` is canonical and
    /// `encode(s·B − h·A) == R` for `h = H(R ‖ A ‖ m) mod ℓ`.
    pub fn check(&self, signature: &Signature, message: &[u8]) -> bool {
        let sig = signature.to_bytes();
        let s: [u8; 32] = sig[32..].try_into().unwrap();
        let s_scalar = Scalar::from_bytes(&s);
        if sub4(&s_scalar.0, &BPO).1 == 0 {
            return false;
        }

        let mut hash = Sha512::new();
        hash.update(&sig[..32]);
        hash.update(self.pk);
        hash.update(message);
        let mut digest = [0u8; 64];
        digest.copy_from_slice(&hash.finalize());

        let h = Scalar::reduce_512(&digest).to_bytes();
        let t = dual_mult(&s, &h, &self.q_table);

        let expected: [u8; 32] = sig[..32].try_into().unwrap();
        t.encode().ct_eq(&expected)
    }
}

fn extend(q: &ExtPoint, table: &[CachedPoint; 16], source: usize) -> CachedPoint {
    let mut t = *q;
    t.add_cached(&table[source]);
    t.to_cached()
}
