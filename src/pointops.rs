//! Pure point-arithmetic functions for `a = 0` short-Weierstrass curves.
//!
//! `point_double`/`point_add` operate on [`JacobianPoint`] and are the
//! kernels every scalar multiplier in [`crate::scalarmul`] is built from.
//! The affine `affine_add`/`affine_double` counterparts exist only to give
//! the test suite an independent, easier-to-read oracle to cross-check
//! against — production code never calls them.

use crate::curves::Curve;
use crate::ecmaths::affine::AffinePoint;
use crate::ecmaths::jacobian::JacobianPoint;
use crate::ecmaths::modarith::{modinv, reduce};
use num_bigint::BigInt;
use num_traits::Zero;

/// Jacobian point doubling, specialised to `a = 0`:
/// `A = 4XY²`, `B = 3X²`, `X' = B² − 2A`, `Y' = −8Y⁴ + B(A − X')`,
/// `Z' = 2YZ`.
pub fn point_double<C: Curve>(p: &JacobianPoint) -> JacobianPoint {
    if p.is_identity() || p.y.is_zero() {
        return JacobianPoint::identity();
    }

    let m = C::p();
    let y2 = reduce(&(&p.y * &p.y), &m);
    let a = reduce(&(&BigInt::from(4) * &p.x * &y2), &m);
    let b = reduce(&(&BigInt::from(3) * &p.x * &p.x), &m);

    let x3 = reduce(&(&b * &b - &BigInt::from(2) * &a), &m);
    let y4 = reduce(&(&y2 * &y2), &m);
    let y3 = reduce(&(-&BigInt::from(8) * &y4 + &b * (&a - &x3)), &m);
    let z3 = reduce(&(&BigInt::from(2) * &p.y * &p.z), &m);

    JacobianPoint { x: x3, y: y3, z: z3 }
}

/// Jacobian point addition for `a = 0` curves:
/// `U₁ = X₁Z₂²`, `U₂ = X₂Z₁²`, `S₁ = Y₁Z₂³`, `S₂ = Y₂Z₁³`,
/// `H = U₂ − U₁`, `R = S₂ − S₁`,
/// `X₃ = R² − H³ − 2U₁H²`, `Y₃ = R(U₁H² − X₃) − S₁H³`, `Z₃ = H·Z₁·Z₂`.
///
/// Handles the exceptional cases: either input is identity, the inputs
/// coincide (`U₁ = U₂, S₁ = S₂` → delegate to [`point_double`]), or the
/// inputs are mutual inverses (`U₁ = U₂, S₁ ≠ S₂` → identity).
pub fn point_add<C: Curve>(p: &JacobianPoint, q: &JacobianPoint) -> JacobianPoint {
    if p.is_identity() {
        return q.clone();
    }
    if q.is_identity() {
        return p.clone();
    }

    let m = C::p();
    let z1z1 = reduce(&(&p.z * &p.z), &m);
    let z2z2 = reduce(&(&q.z * &q.z), &m);

    let u1 = reduce(&(&p.x * &z2z2), &m);
    let u2 = reduce(&(&q.x * &z1z1), &m);
    let s1 = reduce(&(&p.y * &q.z * &z2z2), &m);
    let s2 = reduce(&(&q.y * &p.z * &z1z1), &m);

    if u1 == u2 {
        if s1 != s2 {
            return JacobianPoint::identity();
        }
        return point_double::<C>(p);
    }

    let h = reduce(&(&u2 - &u1), &m);
    let r = reduce(&(&s2 - &s1), &m);
    let h2 = reduce(&(&h * &h), &m);
    let h3 = reduce(&(&h2 * &h), &m);

    let x3 = reduce(&(&r * &r - &h3 - &BigInt::from(2) * &u1 * &h2), &m);
    let y3 = reduce(&(&r * (&u1 * &h2 - &x3) - &s1 * &h3), &m);
    let z3 = reduce(&(&h * &p.z * &q.z), &m);

    if z3.is_zero() {
        return JacobianPoint::identity();
    }

    JacobianPoint { x: x3, y: y3, z: z3 }
}

/// Affine doubling, used only by tests as a cross-check oracle.
pub fn affine_double<C: Curve>(p: &AffinePoint) -> AffinePoint {
    if p.is_identity() || p.y.is_zero() {
        return AffinePoint::identity();
    }

    let m = C::p();
    let numerator = reduce(&(&BigInt::from(3) * &p.x * &p.x + C::a()), &m);
    let denominator = reduce(&(&BigInt::from(2) * &p.y), &m);
    let slope = reduce(
        &(&numerator * modinv(&denominator, &m).expect("denominator not invertible")),
        &m,
    );

    let x3 = reduce(&(&slope * &slope - &BigInt::from(2) * &p.x), &m);
    let y3 = reduce(&(&slope * (&p.x - &x3) - &p.y), &m);

    AffinePoint { x: x3, y: y3 }
}

/// Affine addition, used only by tests as a cross-check oracle. Callers
/// must not pass equal points (use [`affine_double`] for that); that case
/// is asserted against here rather than silently redirected, since it only
/// ever runs inside tests that already know which case they are in.
pub fn affine_add<C: Curve>(p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
    if p.is_identity() {
        return q.clone();
    }
    if q.is_identity() {
        return p.clone();
    }
    assert_ne!(p, q, "affine_add: use affine_double for equal points");

    let m = C::p();
    let numerator = reduce(&(&q.y - &p.y), &m);
    let denominator = reduce(&(&q.x - &p.x), &m);
    let slope = reduce(
        &(&numerator * modinv(&denominator, &m).expect("x1 == x2 without y1 == y2")),
        &m,
    );

    let x3 = reduce(&(&slope * &slope - &p.x - &q.x), &m);
    let y3 = reduce(&(&slope * (&p.x - &x3) - &p.y), &m);

    AffinePoint { x: x3, y: y3 }
}
