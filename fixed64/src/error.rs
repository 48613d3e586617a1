//! Error types.

use core::fmt;

/// Errors returned when decoding or parsing a [`Fixed64`](crate::Fixed64).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Byte encoding is not exactly eight bytes long.
    InvalidLength,

    /// String is not a decimal number with at most eight fractional digits.
    InvalidFormat,

    /// Value does not fit in the 64-bit representation.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InvalidLength => "invalid fixed-point encoding length",
            Error::InvalidFormat => "invalid fixed-point decimal string",
            Error::OutOfRange => "fixed-point value out of range",
        };

        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

/// Result type with the `fixed64` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
