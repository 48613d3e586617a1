//! Affine curve points.

mod arithmetic;
mod mul;

pub use self::mul::ScalarBits;

use crate::{CurveParams, Error, FIELD_BYTES, FieldElement, Result, U256};
use alloc::vec::Vec;
use core::ops::Neg;

/// SEC1 encoding of the point at infinity.
const TAG_IDENTITY: u8 = 0x00;

/// SEC1 compressed encoding, even `y`.
const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 compressed encoding, odd `y`.
const TAG_COMPRESSED_ODD: u8 = 0x03;

/// SEC1 uncompressed encoding.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on a short Weierstrass curve: either the point at infinity, or a pair of affine
/// coordinates over the curve's field.
///
/// Points are plain values. The group operations ([`Point::add`], [`Point::double`],
/// [`Point::mul`]) each return a new point.
///
/// The checked constructors ([`Point::from_affine`], [`Point::from_uints`],
/// [`Point::decompress`], [`Point::from_sec1_bytes`]) guarantee that the coordinates satisfy
/// the curve equation. Building [`Point::Affine`] directly, or through
/// [`Point::from_affine_unchecked`], skips that check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Point<'c> {
    /// The point at infinity, the identity of the group.
    Infinity,

    /// Affine point `(x, y)`.
    ///
    /// Constructing this variant directly does not check the curve equation, or that both
    /// coordinates belong to the same curve. Use [`Point::from_affine`] to get a point
    /// guaranteed to be on the curve; the group operations report mixed curves as
    /// [`Error::CurveMismatch`].
    Affine {
        /// x-coordinate
        x: FieldElement<'c>,

        /// y-coordinate
        y: FieldElement<'c>,
    },
}

impl<'c> Point<'c> {
    /// Base point of the curve.
    pub fn generator(curve: &'c CurveParams) -> Self {
        let (gx, gy) = curve.generator();

        Self::Affine {
            x: FieldElement::from_uint_reduced(curve, gx),
            y: FieldElement::from_uint_reduced(curve, gy),
        }
    }

    /// Create a point from affine coordinates, checking that it lies on the curve.
    pub fn from_affine(x: FieldElement<'c>, y: FieldElement<'c>) -> Result<Self> {
        if !x.same_curve(&y) {
            return Err(Error::CurveMismatch);
        }

        let point = Self::Affine { x, y };

        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Create a point from affine coordinates without checking the curve equation.
    ///
    /// Addition and doubling never involve the `b` coefficient, so arithmetic on such a point
    /// behaves as on the curve `y² = x³ + ax + b'` passing through it.
    pub fn from_affine_unchecked(x: FieldElement<'c>, y: FieldElement<'c>) -> Self {
        debug_assert!(x.same_curve(&y), "coordinates belong to different curves");
        Self::Affine { x, y }
    }

    /// Create a point from integer coordinates in `[0, p)`, checking that it lies on the curve.
    pub fn from_uints(curve: &'c CurveParams, x: &U256, y: &U256) -> Result<Self> {
        Self::from_affine(FieldElement::new(curve, x)?, FieldElement::new(curve, y)?)
    }

    /// Recover the point with x-coordinate `x` whose y-coordinate has the given parity.
    ///
    /// Returns [`Error::NoSquareRoot`] if no point with this x-coordinate exists. When
    /// `y = 0` there is a single point and the parity is ignored.
    pub fn decompress(x: FieldElement<'c>, y_is_odd: bool) -> Result<Self> {
        let y = curve_equation_rhs(&x).sqrt()?;

        let y = if y.is_odd() == y_is_odd { y } else { -y };
        Ok(Self::Affine { x, y })
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Do the coordinates satisfy `y² = x³ + ax + b`?
    ///
    /// The point at infinity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Affine { x, y } => x.same_curve(y) && y.square() == curve_equation_rhs(x),
        }
    }

    /// Affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(FieldElement<'c>, FieldElement<'c>)> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((*x, *y)),
        }
    }

    /// Curve parameters of the coordinates, or `None` for the point at infinity.
    pub fn curve(&self) -> Option<&'c CurveParams> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, .. } => Some(x.curve()),
        }
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Affine { x, y } => Self::Affine { x: *x, y: -y },
        }
    }

    /// Serialize this point using the SEC1 `Elliptic-Curve-Point-to-Octet-String` encoding.
    ///
    /// Coordinates use the curve's [`CurveParams::byte_size`].
    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        let (x, y) = match self {
            Self::Infinity => return alloc::vec![TAG_IDENTITY],
            Self::Affine { x, y } => (x, y),
        };

        let len = x.curve().byte_size();
        let mut bytes = Vec::with_capacity(1 + 2 * len);

        if compress {
            bytes.push(if y.is_odd() {
                TAG_COMPRESSED_ODD
            } else {
                TAG_COMPRESSED_EVEN
            });
            bytes.extend_from_slice(&x.to_be_bytes()[FIELD_BYTES - len..]);
        } else {
            bytes.push(TAG_UNCOMPRESSED);
            bytes.extend_from_slice(&x.to_be_bytes()[FIELD_BYTES - len..]);
            bytes.extend_from_slice(&y.to_be_bytes()[FIELD_BYTES - len..]);
        }

        bytes
    }

    /// Decode a SEC1-encoded point, checking that it lies on the curve.
    pub fn from_sec1_bytes(curve: &'c CurveParams, bytes: &[u8]) -> Result<Self> {
        let len = curve.byte_size();
        let coordinate = |slice: &[u8]| {
            FieldElement::from_be_slice(curve, slice).map_err(|_| Error::InvalidEncoding)
        };

        match bytes.split_first() {
            Some((&TAG_IDENTITY, [])) => Ok(Self::Infinity),
            Some((&tag @ (TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD), x)) if x.len() == len => {
                Self::decompress(coordinate(x)?, tag == TAG_COMPRESSED_ODD)
            }
            Some((&TAG_UNCOMPRESSED, xy)) if xy.len() == 2 * len => {
                let (x, y) = xy.split_at(len);
                Self::from_affine(coordinate(x)?, coordinate(y)?)
            }
            _ => Err(Error::InvalidEncoding),
        }
    }
}

impl<'c> Neg for Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        Point::neg(&self)
    }
}

impl<'c> Neg for &Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        Point::neg(self)
    }
}

/// Coefficient `a` of the curve `x` belongs to.
fn equation_a<'c>(x: &FieldElement<'c>) -> FieldElement<'c> {
    FieldElement::from_monty(x.curve(), x.curve().equation_a)
}

/// `x³ + ax + b`
fn curve_equation_rhs<'c>(x: &FieldElement<'c>) -> FieldElement<'c> {
    let b = FieldElement::from_monty(x.curve(), x.curve().equation_b);
    (x.square() + equation_a(x)) * x + b
}
