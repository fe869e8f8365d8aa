use super::jacobian::JacobianPoint;
use crate::ecmaths::modarith::{from_hex, to_hex_padded};
use crate::error::Error;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// A point on a short-Weierstrass curve in affine coordinates `(x, y)`.
///
/// The point at infinity (identity) is the sentinel `(0, 0)` — outside the
/// curve group for secp256k1, since `y² = 7` has no solution mod `p`, so it
/// is safe as a distinguisher (see spec's data model).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: BigInt,
    pub y: BigInt,
}

impl AffinePoint {
    /// Parse `x`/`y` from hex strings (`0x`-prefixed or bare).
    pub fn from_hex_coordinates(x: &str, y: &str) -> Result<Self, Error> {
        Ok(Self {
            x: from_hex(x)?,
            y: from_hex(y)?,
        })
    }

    /// Uncompressed SEC1-style hex encoding: `04 || x || y`, each coordinate
    /// zero-padded to `byte_width` bytes.
    pub fn to_hex_string(&self, byte_width: usize) -> String {
        format!(
            "04{}{}",
            to_hex_padded(&self.x, byte_width),
            to_hex_padded(&self.y, byte_width)
        )
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn identity() -> Self {
        Self {
            x: BigInt::zero(),
            y: BigInt::zero(),
        }
    }

    /// Lift to Jacobian coordinates: `(x, y, 1)`.
    pub fn to_jacobian(&self) -> JacobianPoint {
        JacobianPoint {
            x: self.x.clone(),
            y: self.y.clone(),
            z: BigInt::one(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_jacobian_sets_z_to_one() {
        let p = AffinePoint {
            x: BigInt::from(4),
            y: BigInt::from(10),
        };
        let j = p.to_jacobian();
        assert_eq!(j.x, BigInt::from(4));
        assert_eq!(j.y, BigInt::from(10));
        assert_eq!(j.z, BigInt::one());
    }

    #[test]
    fn identity_sentinel_is_zero_zero() {
        let id = AffinePoint::identity();
        assert!(id.is_identity());
        assert_eq!(id.x, BigInt::zero());
        assert_eq!(id.y, BigInt::zero());
    }

    #[test]
    fn from_hex_coordinates_matches_generator() {
        use crate::curves::secp256k1::Secp256k1;
        use crate::curves::Curve;

        let g = AffinePoint::from_hex_coordinates(
            "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        )
        .unwrap();
        assert_eq!(g, Secp256k1::g());
    }

    #[test]
    fn from_hex_coordinates_rejects_non_hex() {
        assert!(AffinePoint::from_hex_coordinates("not-hex", "01").is_err());
    }

    #[test]
    fn to_hex_string_round_trips_through_from_hex_coordinates() {
        use crate::curves::secp256k1::Secp256k1;
        use crate::curves::Curve;

        let g = Secp256k1::g();
        let encoded = g.to_hex_string(Secp256k1::byte_width());
        assert_eq!(encoded.len(), 2 + 2 * 2 * Secp256k1::byte_width());
        assert!(encoded.starts_with("04"));

        let (x_hex, y_hex) = encoded[2..].split_at(2 * Secp256k1::byte_width());
        let decoded = AffinePoint::from_hex_coordinates(x_hex, y_hex).unwrap();
        assert_eq!(decoded, g);
    }
}
