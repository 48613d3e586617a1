//! Field elements modulo a curve's prime `p`, kept in Montgomery form.

pub(crate) mod sqrt;

use crate::{CurveParams, Error, FIELD_BYTES, LIMBS, Result, U256};
use bigint::{Encoding, modular::MontyForm};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "rand_core")]
use {bigint::RandomMod, rand_core::CryptoRngCore};

/// Element of the prime field `𝔽p` of a particular curve.
///
/// The value is always fully reduced into `[0, p)`. Every operation returns a new element;
/// nothing is mutated in place except through the `*Assign` operators.
///
/// Both operands of a binary operator must belong to the same [`CurveParams`]. Mixing curves
/// is a logic error caught by debug assertions; the fallible methods ([`FieldElement::div`])
/// report it as [`Error::CurveMismatch`] instead.
#[derive(Clone, Copy)]
pub struct FieldElement<'c> {
    inner: MontyForm<LIMBS>,
    curve: &'c CurveParams,
}

impl<'c> FieldElement<'c> {
    /// Zero element (additive identity).
    pub fn zero(curve: &'c CurveParams) -> Self {
        Self::from_monty(curve, MontyForm::zero(curve.monty))
    }

    /// Multiplicative identity.
    pub fn one(curve: &'c CurveParams) -> Self {
        Self::from_monty(curve, MontyForm::one(curve.monty))
    }

    /// Create a field element from an integer in `[0, p)`.
    ///
    /// Returns [`Error::Overflow`] if `value ≥ p`.
    pub fn new(curve: &'c CurveParams, value: &U256) -> Result<Self> {
        if value >= curve.modulus() {
            return Err(Error::Overflow);
        }

        Ok(Self::from_uint_reduced(curve, value))
    }

    /// Create a field element from any 256-bit integer, reducing it modulo `p`.
    pub fn from_uint_reduced(curve: &'c CurveParams, value: &U256) -> Self {
        Self::from_monty(curve, MontyForm::new(value, curve.monty))
    }

    /// Convert a `u64` into a field element, reducing it modulo `p`.
    pub fn from_u64(curve: &'c CurveParams, w: u64) -> Self {
        Self::from_uint_reduced(curve, &U256::from_u64(w))
    }

    /// Decode a field element from its canonical big-endian encoding.
    pub fn from_be_bytes(curve: &'c CurveParams, bytes: &[u8; FIELD_BYTES]) -> Result<Self> {
        Self::new(curve, &U256::from_be_bytes(*bytes))
    }

    /// Decode a field element from a big-endian byte slice of at most [`FIELD_BYTES`] bytes.
    ///
    /// Shorter slices are treated as if left-padded with zeros.
    pub fn from_be_slice(curve: &'c CurveParams, slice: &[u8]) -> Result<Self> {
        if slice.len() > FIELD_BYTES {
            return Err(Error::Overflow);
        }

        let mut bytes = [0u8; FIELD_BYTES];
        bytes[FIELD_BYTES - slice.len()..].copy_from_slice(slice);
        Self::from_be_bytes(curve, &bytes)
    }

    /// Generate a uniformly random field element.
    #[cfg(feature = "rand_core")]
    pub fn random(curve: &'c CurveParams, rng: &mut (impl CryptoRngCore + ?Sized)) -> Self {
        Self::from_uint_reduced(curve, &U256::random_mod(rng, &curve.nonzero_modulus))
    }

    pub(crate) fn from_monty(curve: &'c CurveParams, inner: MontyForm<LIMBS>) -> Self {
        Self { inner, curve }
    }

    /// Curve parameters this element belongs to.
    pub fn curve(&self) -> &'c CurveParams {
        self.curve
    }

    /// Integer representative in `[0, p)`.
    pub fn to_uint(&self) -> U256 {
        self.inner.retrieve()
    }

    /// Big-endian encoding of the integer representative.
    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        self.to_uint().to_be_bytes()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.to_uint() == U256::ZERO
    }

    /// Is the integer representative odd?
    pub fn is_odd(&self) -> bool {
        self.to_uint().as_words()[0] & 1 == 1
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        self.debug_check_curve(rhs);
        Self::from_monty(self.curve, self.inner + rhs.inner)
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.debug_check_curve(rhs);
        Self::from_monty(self.curve, self.inner - rhs.inner)
    }

    /// Returns `-self mod p`, which is zero when `self` is zero.
    pub fn neg(&self) -> Self {
        Self::from_monty(self.curve, -self.inner)
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        self.debug_check_curve(rhs);
        Self::from_monty(self.curve, self.inner * rhs.inner)
    }

    /// Returns `self² mod p`.
    pub fn square(&self) -> Self {
        Self::from_monty(self.curve, self.inner.square())
    }

    /// Returns `2·self mod p`.
    pub fn double(&self) -> Self {
        Self::from_monty(self.curve, self.inner + self.inner)
    }

    /// Returns `self^exp mod p`.
    pub fn pow(&self, exp: &U256) -> Self {
        Self::from_monty(self.curve, self.inner.pow(exp))
    }

    /// Returns the multiplicative inverse of `self`.
    ///
    /// Computed as `self^(p - 2)`, which requires `p` to be prime.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(self.pow(&self.curve.inversion_exponent))
    }

    /// Returns `self · rhs⁻¹ mod p`.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        if !self.curve.same_curve(rhs.curve) {
            return Err(Error::CurveMismatch);
        }

        Ok(self.mul(&rhs.invert()?))
    }

    /// Returns the square root of `self`, or [`Error::NoSquareRoot`] if `self` is a
    /// quadratic non-residue.
    ///
    /// Of the two roots `r` and `p - r`, the even one is returned. Negate the result to get
    /// the odd root.
    pub fn sqrt(&self) -> Result<Self> {
        let root = Self::from_monty(self.curve, self.curve.sqrt.sqrt(&self.inner)?);

        if root.is_odd() {
            Ok(root.neg())
        } else {
            Ok(root)
        }
    }

    /// Do both elements belong to the same curve?
    pub(crate) fn same_curve(&self, other: &Self) -> bool {
        self.curve.same_curve(other.curve)
    }

    #[inline]
    fn debug_check_curve(&self, rhs: &Self) {
        debug_assert!(
            self.same_curve(rhs),
            "field elements belong to different curves"
        );
    }
}

impl ConstantTimeEq for FieldElement<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_uint().ct_eq(&other.to_uint())
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.to_uint() == other.to_uint() && self.same_curve(other)
    }
}

impl Eq for FieldElement<'_> {}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", self)
    }
}

impl fmt::LowerHex for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<'c> $op for FieldElement<'c> {
            type Output = FieldElement<'c>;

            #[inline]
            fn $op_fn(self, rhs: FieldElement<'c>) -> FieldElement<'c> {
                FieldElement::$op_fn(&self, &rhs)
            }
        }

        impl<'c> $op<&FieldElement<'c>> for FieldElement<'c> {
            type Output = FieldElement<'c>;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement<'c>) -> FieldElement<'c> {
                FieldElement::$op_fn(&self, rhs)
            }
        }

        impl<'c> $op<&FieldElement<'c>> for &FieldElement<'c> {
            type Output = FieldElement<'c>;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement<'c>) -> FieldElement<'c> {
                FieldElement::$op_fn(self, rhs)
            }
        }

        impl<'c> $assign for FieldElement<'c> {
            #[inline]
            fn $assign_fn(&mut self, rhs: FieldElement<'c>) {
                *self = FieldElement::$op_fn(self, &rhs);
            }
        }

        impl<'c> $assign<&FieldElement<'c>> for FieldElement<'c> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &FieldElement<'c>) {
                *self = FieldElement::$op_fn(self, rhs);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign);
impl_field_op!(Sub, sub, SubAssign, sub_assign);
impl_field_op!(Mul, mul, MulAssign, mul_assign);

impl<'c> Neg for FieldElement<'c> {
    type Output = FieldElement<'c>;

    #[inline]
    fn neg(self) -> FieldElement<'c> {
        FieldElement::neg(&self)
    }
}

impl<'c> Neg for &FieldElement<'c> {
    type Output = FieldElement<'c>;

    #[inline]
    fn neg(self) -> FieldElement<'c> {
        FieldElement::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::{CurveParams, Error, U256};

    #[test]
    fn identities() {
        let curve = CurveParams::sm2();
        let zero = FieldElement::zero(&curve);
        let one = FieldElement::one(&curve);

        assert!(zero.is_zero());
        assert_eq!(one.to_uint(), U256::ONE);
        assert_eq!(-zero, zero);
        assert_eq!(one.invert().unwrap(), one);
        assert_eq!(zero.invert(), Err(Error::DivisionByZero));
    }

    #[test]
    fn new_rejects_unreduced() {
        let curve = CurveParams::sm2();
        assert_eq!(
            FieldElement::new(&curve, curve.modulus()),
            Err(Error::Overflow)
        );

        let reduced = FieldElement::from_uint_reduced(&curve, curve.modulus());
        assert!(reduced.is_zero());
    }

    #[test]
    fn minus_one_squared_is_one() {
        let curve = CurveParams::sm2();
        let minus_one = -FieldElement::one(&curve);
        assert_eq!(
            minus_one.to_uint(),
            curve.modulus().wrapping_sub(&U256::ONE)
        );
        assert_eq!(minus_one.square(), FieldElement::one(&curve));
    }

    #[test]
    fn slice_decoding() {
        let curve = CurveParams::sm2();
        let fe = FieldElement::from_be_slice(&curve, &[0x01, 0x00]).unwrap();
        assert_eq!(fe, FieldElement::from_u64(&curve, 256));
        assert_eq!(
            FieldElement::from_be_slice(&curve, &[0u8; 33]),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn equality_requires_same_curve() {
        let sm2 = CurveParams::sm2();
        let test = CurveParams::sm2_test();
        let a = FieldElement::from_u64(&sm2, 7);
        let b = FieldElement::from_u64(&test, 7);
        assert_ne!(a, b);
        assert_eq!(a.div(&b), Err(Error::CurveMismatch));
    }

    #[test]
    fn hex_formatting() {
        let curve = CurveParams::sm2();
        let fe = FieldElement::from_u64(&curve, 0xAB);
        let lower = alloc::format!("{fe:x}");
        assert_eq!(lower.len(), 64);
        assert!(lower.ends_with("ab"));
        assert!(alloc::format!("{fe:?}").ends_with("AB)"));
    }
}
