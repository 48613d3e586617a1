//! Group law in affine coordinates.
//!
//! Each operation performs at most one field inversion. Inversion of a zero residue is reported
//! as [`Error::DivisionByZero`] rather than being masked, although for points on the curve the
//! special cases below ensure it never happens.

use super::{Point, equation_a};
use crate::{Error, FieldElement, Result};

impl<'c> Point<'c> {
    /// Returns `self + other`.
    ///
    /// Inverse pairs sum to [`Point::Infinity`]; equal points are doubled with the tangent
    /// slope; anything else uses the chord through both points.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let (x1, y1, x2, y2) = match (self, other) {
            (Self::Infinity, _) => return Ok(*other),
            (_, Self::Infinity) => return Ok(*self),
            (Self::Affine { x: x1, y: y1 }, Self::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if !(x1.same_curve(y1) && x1.same_curve(x2) && x2.same_curve(y2)) {
            return Err(Error::CurveMismatch);
        }

        if x1 == x2 {
            if *y1 == -y2 {
                return Ok(Self::Infinity);
            }

            if y1 == y2 {
                return self.double();
            }
        }

        // λ = (y₂ - y₁) / (x₂ - x₁)
        let lambda = (y2 - y1).div(&(x2 - x1))?;
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - &x3) - y1;

        Ok(Self::Affine { x: x3, y: y3 })
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match self {
            Self::Infinity => return Ok(Self::Infinity),
            Self::Affine { x, y } => (x, y),
        };

        if !x.same_curve(y) {
            return Err(Error::CurveMismatch);
        }

        // vertical tangent
        if y.is_zero() {
            return Ok(Self::Infinity);
        }

        // λ = (3x² + a) / 2y
        let three = FieldElement::from_u64(x.curve(), 3);
        let lambda = (three * x.square() + equation_a(x)).div(&y.double())?;
        let x3 = lambda.square() - x.double();
        let y3 = lambda * (x - &x3) - y;

        Ok(Self::Affine { x: x3, y: y3 })
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use crate::{CurveParams, Error, FieldElement, U256};

    /// y² = x³ + x + 4 over 𝔽₉₇, a group of prime order 89 generated by (0, 2).
    fn tiny() -> CurveParams {
        CurveParams::new(
            "tiny",
            U256::from_u8(97),
            U256::ONE,
            U256::from_u8(4),
            U256::from_u8(89),
            (U256::ZERO, U256::from_u8(2)),
        )
        .unwrap()
    }

    fn point(curve: &CurveParams, x: u64, y: u64) -> Point<'_> {
        Point::from_affine(
            FieldElement::from_u64(curve, x),
            FieldElement::from_u64(curve, y),
        )
        .unwrap()
    }

    #[test]
    fn small_curve_multiples() {
        let curve = tiny();
        let g = Point::generator(&curve);

        let g2 = g.double().unwrap();
        assert_eq!(g2, point(&curve, 91, 48));

        let g3 = g2.add(&g).unwrap();
        assert_eq!(g3, point(&curve, 54, 24));
        assert_eq!(g3.sub(&g).unwrap(), g2);
    }

    #[test]
    fn vertical_tangent_doubles_to_identity() {
        // y² = x³ + 1 over 𝔽₉₇ contains (-1, 0), a point of order 2
        let curve = CurveParams::new(
            "order-two",
            U256::from_u8(97),
            U256::ZERO,
            U256::ONE,
            U256::from_u8(2),
            (U256::from_u8(96), U256::ZERO),
        )
        .unwrap();
        let p = Point::generator(&curve);

        assert_eq!(p.double().unwrap(), Point::Infinity);
        assert_eq!(p.add(&p).unwrap(), Point::Infinity);
    }

    #[test]
    fn equal_x_unrelated_y_is_division_by_zero() {
        let curve = tiny();
        let x = FieldElement::from_u64(&curve, 0);
        let p = Point::from_affine_unchecked(x, FieldElement::from_u64(&curve, 2));
        let q = Point::from_affine_unchecked(x, FieldElement::from_u64(&curve, 3));

        assert_eq!(p.add(&q), Err(Error::DivisionByZero));
    }

    #[test]
    fn mixed_curves_are_rejected() {
        let sm2 = CurveParams::sm2();
        let test = CurveParams::sm2_test();
        let p = Point::generator(&sm2);
        let q = Point::generator(&test);

        assert_eq!(p.add(&q), Err(Error::CurveMismatch));
    }

    #[test]
    fn coordinates_from_mixed_curves_are_rejected() {
        let sm2 = CurveParams::sm2();
        let test = CurveParams::sm2_test();
        let g = Point::generator(&sm2);
        let (gx, gy) = g.coordinates().unwrap();

        let mixed_y = Point::Affine {
            x: gx,
            y: FieldElement::one(&test),
        };
        assert_eq!(mixed_y.add(&g), Err(Error::CurveMismatch));
        assert_eq!(g.add(&mixed_y), Err(Error::CurveMismatch));
        assert_eq!(mixed_y.double(), Err(Error::CurveMismatch));
        assert_eq!(mixed_y.mul(&3u64), Err(Error::CurveMismatch));

        let mixed_x = Point::Affine {
            x: FieldElement::one(&test),
            y: gy,
        };
        assert_eq!(g.add(&mixed_x), Err(Error::CurveMismatch));
    }
}
