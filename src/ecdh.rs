//! ECDH driver: composes [`crate::scalarmul`] into the two-party key
//! agreement `[a]([b]G) == [b]([a]G)`.

use crate::curves::Curve;
use crate::ecmaths::affine::AffinePoint;
use crate::ecmaths::modarith::{from_hex, to_hex_padded};
use crate::error::Error;
use crate::scalarmul::{precompute, windowed_scalar_mul};
use num_bigint::BigInt;

/// The agreed shared secret: the affine x-coordinate of `[a*b]G`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSecret(BigInt);

impl SharedSecret {
    pub fn to_hex<C: Curve>(&self) -> String {
        to_hex_padded(&self.0, C::byte_width())
    }
}

/// One party's contribution: `[priv]G`, ready to be sent to the peer.
pub fn public_point<C: Curve>(priv_scalar: &BigInt) -> AffinePoint {
    let g = C::g().to_jacobian();
    let table = precompute::<C>(&g);
    windowed_scalar_mul::<C>(&table, priv_scalar).from_jacobian::<C>()
}

/// Run the agreement for both parties and cross-check the result, exactly as
/// spec'd: derive `A = [a]G`, `B = [b]G`, then `[b]A` and `[a]B`
/// independently and compare before returning either.
///
/// `priv_a`/`priv_b` are parsed as hex scalars (see [`from_hex`]). Returns
/// [`Error::InvalidInput`] on malformed hex and [`Error::InconsistentResult`]
/// if the two derivations of the shared point disagree — which would mean a
/// bug in the scalar multiplier, not bad input, since the two sides use the
/// same code path on different scalars.
pub fn agree<C: Curve>(priv_a_hex: &str, priv_b_hex: &str) -> Result<SharedSecret, Error> {
    let a = from_hex(priv_a_hex)?;
    let b = from_hex(priv_b_hex)?;

    let pub_a = public_point::<C>(&a);
    let pub_b = public_point::<C>(&b);

    let table_pub_b = precompute::<C>(&pub_b.to_jacobian());
    let shared_via_a = windowed_scalar_mul::<C>(&table_pub_b, &a).from_jacobian::<C>();

    let table_pub_a = precompute::<C>(&pub_a.to_jacobian());
    let shared_via_b = windowed_scalar_mul::<C>(&table_pub_a, &b).from_jacobian::<C>();

    if shared_via_a != shared_via_b {
        return Err(Error::InconsistentResult);
    }

    Ok(SharedSecret(shared_via_a.x))
}
