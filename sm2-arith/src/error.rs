//! Error types.

use core::fmt;

/// Errors returned by field and point arithmetic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempted to invert (or divide by) the zero residue.
    DivisionByZero,

    /// The value is a quadratic non-residue and has no square root.
    NoSquareRoot,

    /// Scalars must be non-negative.
    NegativeScalar,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,

    /// Operands belong to different curves.
    CurveMismatch,

    /// Integer input is not reduced modulo the field prime.
    Overflow,

    /// Curve parameters were rejected.
    InvalidParameters,

    /// Malformed point encoding.
    InvalidEncoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::DivisionByZero => "division by zero residue",
            Error::NoSquareRoot => "no square root exists",
            Error::NegativeScalar => "negative scalar",
            Error::NotOnCurve => "point is not on the curve",
            Error::CurveMismatch => "operands belong to different curves",
            Error::Overflow => "value overflows the field modulus",
            Error::InvalidParameters => "invalid curve parameters",
            Error::InvalidEncoding => "invalid point encoding",
        };

        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

/// Result type with the `sm2-arith` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
