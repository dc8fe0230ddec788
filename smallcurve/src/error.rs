//! Error types.

use core::fmt;

/// Errors raised by curve arithmetic and the protocols built on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Division by a value which shares a factor with the field modulus.
    NotInvertible,

    /// Field modulus outside the supported range (`2 ≤ p ≤ i64::MAX`).
    Modulus,

    /// The random number generator failed to produce bytes.
    Randomness,

    /// Uniform scalar sampling was requested for a group order below 2.
    InvalidOrder,

    /// Curve discriminant `4a³ + 27b²` vanishes modulo `p`.
    SingularCurve,

    /// Field modulus is not prime.
    CompositeModulus,

    /// Point does not satisfy the curve equation.
    NotOnCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::NotInvertible => "divisor is not invertible modulo p",
            Error::Modulus => "field modulus out of range",
            Error::Randomness => "random number generator failure",
            Error::InvalidOrder => "group order must be at least 2",
            Error::SingularCurve => "curve is singular",
            Error::CompositeModulus => "field modulus is not prime",
            Error::NotOnCurve => "point is not on the curve",
        })
    }
}

impl core::error::Error for Error {}

/// Result type with the `smallcurve` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
