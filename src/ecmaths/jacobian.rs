use super::affine::AffinePoint;
use crate::curves::Curve;
use crate::ecmaths::modarith::{modinv, reduce};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// A point on a short-Weierstrass curve in Jacobian projective coordinates
/// `(X, Y, Z)`, with affine equivalent `(X/Z², Y/Z³)` when `Z ≠ 0`.
///
/// The point at infinity is the sentinel `(1, 1, 0)` — an unambiguous
/// `Z = 0` marker. The other sentinel that shows up in naive translations,
/// `(0, 0, 1)`, is *not* used here: lifting the affine zero-point `(0, 0)`
/// produces `(0, 0, 1)`, which has `Z ≠ 0` and is therefore NOT treated as
/// identity by this type — see `is_identity` below and DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JacobianPoint {
    pub x: BigInt,
    pub y: BigInt,
    pub z: BigInt,
}

impl JacobianPoint {
    pub fn identity() -> Self {
        Self {
            x: BigInt::one(),
            y: BigInt::one(),
            z: BigInt::zero(),
        }
    }

    /// A point is the identity iff `Z == 0`. Any such point is normalised to
    /// the canonical sentinel on output (see `point_add`/`point_double`).
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Affine equivalent. Identity (or any `Z == 0` point, which is treated
    /// as identity on input) maps to the affine identity sentinel.
    pub fn from_jacobian<C: Curve>(&self) -> AffinePoint {
        if self.is_identity() {
            return AffinePoint::identity();
        }

        let p = C::p();
        // modinv cannot fail here: Z is nonzero and p is prime, so
        // gcd(Z mod p, p) == 1 unless Z ≡ 0 (mod p), which would make this
        // point ill-formed input — a precondition violation, not handled.
        let w = modinv(&self.z, &p).expect("jacobian Z has no inverse mod p");
        let w2 = reduce(&(&w * &w), &p);
        let w3 = reduce(&(&w2 * &w), &p);

        AffinePoint {
            x: reduce(&(&self.x * &w2), &p),
            y: reduce(&(&self.y * &w3), &p),
        }
    }
}
