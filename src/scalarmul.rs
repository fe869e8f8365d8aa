//! Scalar multiplication: the reference binary ladder and the fixed-window
//! multiplier it is used to cross-check.

use crate::curves::Curve;
use crate::ecmaths::jacobian::JacobianPoint;
use crate::ecmaths::modarith::{bit_length, get_bit, get_bits};
use num_bigint::BigInt;

/// Window width for [`precompute`]/[`windowed_scalar_mul`].
pub const WINDOW_WIDTH: u64 = 4;

/// Left-to-right binary double-and-add: the textbook reference multiplier,
/// used as the oracle [`windowed_scalar_mul`] is tested against.
///
/// Scans bits of `k` from one below the most significant down to bit 0,
/// doubling every step and adding `p` whenever the scanned bit is set.
pub fn double_and_add<C: Curve>(p: &JacobianPoint, k: &BigInt) -> JacobianPoint {
    let m = bit_length(k);
    if m == 0 {
        return JacobianPoint::identity();
    }

    let mut q = p.clone();
    for i in 2..=m {
        q = crate::pointops::point_double::<C>(&q);
        if get_bit(k, m - i) {
            q = crate::pointops::point_add::<C>(p, &q);
        }
    }
    q
}

/// Precomputed table `T[i] = [i]P` for `i ∈ [0, 2^w)`, `w = `[`WINDOW_WIDTH`].
///
/// `T[0]` is the identity, `T[1] = P`, and each subsequent entry is built by
/// one more addition of `P` — exactly `2^w - 2` additions total, and exactly
/// `2^w` entries (not `2^w + 2`, as an earlier, buggy draft of this
/// algorithm produced).
pub fn precompute<C: Curve>(p: &JacobianPoint) -> Vec<JacobianPoint> {
    let size = 1usize << WINDOW_WIDTH;
    let mut table = Vec::with_capacity(size);
    table.push(JacobianPoint::identity());
    table.push(p.clone());
    for i in 2..size {
        let next = crate::pointops::point_add::<C>(p, &table[i - 1]);
        table.push(next);
    }
    table
}

/// Fixed-window (width `w`) left-to-right scalar multiplier.
///
/// Scans `k` in `w`-bit windows, most significant first: `w` doublings per
/// window, then one table lookup and addition if the window is nonzero
/// (skipped, not an add-with-identity, when the window is zero — those
/// doublings still run, even on the first iteration, since skipping them is
/// an optional optimisation this implementation does not take).
///
/// Preconditions (unchecked — precondition violations, not caught): `table`
/// has exactly `2^w` entries and `table[i]` really is `[i]P` for every `i`.
pub fn windowed_scalar_mul<C: Curve>(table: &[JacobianPoint], k: &BigInt) -> JacobianPoint {
    let w = WINDOW_WIDTH;
    let l = bit_length(k);
    let m = l.div_ceil(w).max(1);

    let mut q = JacobianPoint::identity();
    for i in 0..m {
        for _ in 0..w {
            q = crate::pointops::point_double::<C>(&q);
        }
        let start = (m - i - 1) * w;
        let v = get_bits(k, start, w) as usize;
        if v > 0 {
            q = crate::pointops::point_add::<C>(&q, &table[v]);
        }
    }
    q
}
