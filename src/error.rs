use thiserror::Error;

/// Failure kinds surfaced by the arithmetic and ECDH layers.
///
/// The core never recovers from one of these: it reports the first violated
/// precondition and unwinds via `?`. There are no retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate or scalar string was malformed, or a value fell outside
    /// the range an operation requires (e.g. a non-hex scalar, a coordinate
    /// not in `[0, p)`).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `modinv` was asked to invert a value sharing a factor with the
    /// modulus. Unreachable for the shipped curve parameters and nonzero
    /// residues, but checked defensively since the precondition is caller
    /// supplied.
    #[error("modular inverse does not exist")]
    InverseDoesNotExist,

    /// The ECDH driver's cross-check `[a]([b]G) == [b]([a]G)` failed. This
    /// indicates a bug in the arithmetic layer, not a user error.
    #[error("ECDH shared-secret cross-check failed")]
    InconsistentResult,
}
