#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod error;

pub use crate::error::{Error, Result};

use core::{fmt, str::FromStr};

/// Number of decimal digits after the point.
pub const DECIMALS: usize = 8;

/// Size of the byte encoding of a [`Fixed64`].
pub const ENCODED_LEN: usize = 8;

/// `10⁸` as an unsigned integer.
const UNIT: u64 = Fixed64::SCALE.unsigned_abs();

/// Signed decimal number with [`DECIMALS`] fractional digits.
///
/// Stored as the integer `value × 10⁸`, so arithmetic is exact and
/// `Fixed64::from_raw(1)` is `0.00000001`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Fixed64(i64);

impl Fixed64 {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One.
    pub const ONE: Self = Self(Self::SCALE);

    /// Scaling factor between a [`Fixed64`] and its raw representation.
    pub const SCALE: i64 = 100_000_000;

    /// Largest representable value.
    pub const MAX: Self = Self(i64::MAX);

    /// Smallest representable value.
    pub const MIN: Self = Self(i64::MIN);

    /// Create a value from its raw representation, `value × 10⁸`.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw representation, `value × 10⁸`.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Little-endian byte encoding of the raw representation.
    pub const fn to_bytes(self) -> [u8; ENCODED_LEN] {
        self.0.to_le_bytes()
    }

    /// Decode a value from its little-endian byte encoding.
    pub const fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        Self(i64::from_le_bytes(bytes))
    }

    /// Decode a value from a byte slice, which must be exactly [`ENCODED_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        bytes
            .try_into()
            .map(Self::from_bytes)
            .map_err(|_| Error::InvalidLength)
    }

    /// Is this value below zero?
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns `self + rhs`, or `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Returns `self - rhs`, or `None` on overflow.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Returns `-self`, or `None` for [`Fixed64::MIN`].
    pub const fn checked_neg(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();

        write!(
            f,
            "{sign}{}.{:0width$}",
            magnitude / UNIT,
            magnitude % UNIT,
            width = DECIMALS
        )
    }
}

impl FromStr for Fixed64 {
    type Err = Error;

    /// Parse a decimal such as `-12.5` or `0.00000001`.
    ///
    /// An optional sign is followed by at least one integer digit and, optionally, a point and
    /// one to [`DECIMALS`] fractional digits.
    fn from_str(s: &str) -> Result<Self> {
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(Error::InvalidFormat),
            Some(parts) => parts,
            None => (unsigned, ""),
        };

        if integer.is_empty() || fraction.len() > DECIMALS {
            return Err(Error::InvalidFormat);
        }

        let mut fraction_value = parse_digits(fraction)?;
        for _ in fraction.len()..DECIMALS {
            fraction_value *= 10;
        }

        let magnitude = parse_digits(integer)?
            .checked_mul(UNIT)
            .and_then(|value| value.checked_add(fraction_value))
            .ok_or(Error::OutOfRange)?;

        let raw = if negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };

        raw.map(Self).ok_or(Error::OutOfRange)
    }
}

/// Parse a run of ASCII decimal digits. The empty string parses as zero.
fn parse_digits(digits: &str) -> Result<u64> {
    digits.bytes().try_fold(0u64, |acc, byte| {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidFormat);
        }

        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(byte - b'0')))
            .ok_or(Error::OutOfRange)
    })
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for Fixed64 {
    fn serialize<S>(&self, s: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_bytes(), s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for Fixed64 {
    fn deserialize<D>(d: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let mut bytes = [0u8; ENCODED_LEN];
        serdect::array::deserialize_hex_or_bin(&mut bytes, d)?;
        Ok(Self::from_bytes(bytes))
    }
}
