use super::Curve;
use crate::ecmaths::affine::AffinePoint;
use crate::ecmaths::modarith::from_hex;
use num_bigint::BigInt;
use num_traits::Zero;

/// The Bitcoin curve: `y² = x³ + 7 mod p`, `p = 2²⁵⁶ − 2³² − 977`, cofactor 1.
///
/// Reference: SEC 2 v2 (<https://www.secg.org/sec2-v2.pdf>).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    fn p() -> BigInt {
        from_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f").unwrap()
    }

    fn a() -> BigInt {
        BigInt::zero()
    }

    fn b() -> BigInt {
        BigInt::from(7)
    }

    fn n() -> BigInt {
        from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").unwrap()
    }

    fn g() -> AffinePoint {
        AffinePoint {
            x: from_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap(),
            y: from_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8")
                .unwrap(),
        }
    }

    fn byte_width() -> usize {
        32
    }
}
