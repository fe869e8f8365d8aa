use crate::ecmaths::affine::AffinePoint;
use num_bigint::BigInt;

pub mod secp256k1;

/// Parameters of a short-Weierstrass curve `y² = x³ + a·x + b mod p`.
///
/// Every operation in this crate takes its curve parameters through this
/// trait rather than a hardcoded constant, so a second curve is a second
/// `impl`, not a fork of the arithmetic. The doubling formula in
/// [`crate::pointops`] is specialised to `a = 0`; curves with `a ≠ 0` are
/// out of scope (see DESIGN.md).
pub trait Curve {
    /// Field prime modulus `p`.
    fn p() -> BigInt;
    /// Curve coefficient `a`. Must be `0` for the doubling formula this
    /// crate implements.
    fn a() -> BigInt;
    /// Curve coefficient `b`.
    fn b() -> BigInt;
    /// Order `n` of the base point's cyclic subgroup.
    fn n() -> BigInt;
    /// Generator point `G`.
    fn g() -> AffinePoint;
    /// Number of bytes in a canonical field/scalar encoding (32 for
    /// secp256k1). Used only for hex formatting.
    fn byte_width() -> usize;
}
