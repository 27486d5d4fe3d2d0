//! Constant-time comparison.
//!
//! Verification ends by comparing a freshly computed point encoding
//! against the `R` half of the signature. An early-exit comparison would
//! reveal through timing how many leading bytes matched; the comparison
//! here accumulates the difference over the full buffer before deciding.

pub(crate) trait ConstantTimeEq {
    /// Returns `true` if `self == other`, taking the same time for every
    /// pair of inputs of the same length.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8; 32] {
    /// Equality of 32-byte buffers without data-dependent exits.
    ///
    /// All byte differences are ORed into one accumulator; only the final
    /// accumulator is inspected, so where the buffers diverge has no
    /// effect on the running time.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        let mut diff = 0u8;
        for i in 0..32 {
            diff |= self[i] ^ other[i];
        }
        diff == 0
    }
}
