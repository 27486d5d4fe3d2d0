//! Ed25519 twisted Edwards curve arithmetic.
//!
//! Everything specific to the Edwards form of the curve lives here:
//!
//! - `group` — point representations, the extended-coordinate group law,
//!   compression and strict decompression;
//! - `table` — curve constants, the 16-entry base-point folding table and
//!   the distribution blinding constant;
//! - `mul` — the folding fixed-base multiplier and the dual multiplier
//!   used by signature verification.
//!
//! The Montgomery-ladder side of the curve lives in `crate::montgomery`;
//! the two meet only through the birational map used by the fast X25519
//! public-key path.

pub(crate) mod group;
pub(crate) mod mul;
pub(crate) mod table;

pub use group::ExtPoint;
pub use mul::base_point_multiply;
