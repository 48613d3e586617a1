//! Curve parameters.

use crate::{Error, LIMBS, Result, field::sqrt::SqrtAlgorithm};
use bigint::{
    NonZero, Odd, U256,
    modular::{MontyForm, MontyParams},
};
use core::fmt;

#[cfg(feature = "rand_core")]
use {bigint::RandomMod, rand_core::CryptoRngCore};

/// SM2 recommended curve, from GB/T 32918.5-2017.
mod sm2 {
    pub(super) const P: &str = "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF";
    pub(super) const A: &str = "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC";
    pub(super) const B: &str = "28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93";
    pub(super) const N: &str = "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123";
    pub(super) const GX: &str = "32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7";
    pub(super) const GY: &str = "BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0";
}

/// 256-bit example curve from the worked examples of GM/T 0003-2012.
mod sm2_test {
    pub(super) const P: &str = "8542D69E4C044F18E8B92435BF6FF7DE457283915C45517D722EDB8B08F1DFC3";
    pub(super) const A: &str = "787968B4FA32C3FD2417842E73BBFEFF2F3C848B6831D7E0EC65228B3937E498";
    pub(super) const B: &str = "63E4C6D3B23B0C849CF84241484BFE48F61D59A5B16BA06E6E12D1DA27C5249A";
    pub(super) const N: &str = "8542D69E4C044F18E8B92435BF6FF7DD297720630485628D5AE74EE7C32E79B7";
    pub(super) const GX: &str = "421DEBD61B62EAB6746434EBC3CC315E32220B3BADD50BDC4C4E6C147FEDD43D";
    pub(super) const GY: &str = "0680512BCBB42C07D47349D2153B70C4E5D7FDFCBFA36EA1A85841B9E46E09A2";
}

/// Parameters of a short Weierstrass curve `y² = x³ + ax + b` over the prime field `𝔽p`,
/// together with a base point `G` of order `n`.
///
/// Parameters are immutable once constructed. Build them once, then hand out `&CurveParams`
/// to every [`FieldElement`](crate::FieldElement) and [`Point`](crate::Point) that needs them.
#[derive(Clone)]
pub struct CurveParams {
    name: &'static str,
    modulus: Odd<U256>,
    order: NonZero<U256>,
    a: U256,
    b: U256,
    generator: (U256, U256),
    bit_size: u32,
    pub(crate) nonzero_modulus: NonZero<U256>,
    pub(crate) monty: MontyParams<LIMBS>,
    pub(crate) equation_a: MontyForm<LIMBS>,
    pub(crate) equation_b: MontyForm<LIMBS>,

    /// `p - 2`, for inversion by Fermat's little theorem.
    pub(crate) inversion_exponent: U256,
    pub(crate) sqrt: SqrtAlgorithm,
}

impl CurveParams {
    /// Validate and precompute parameters for the curve `y² = x³ + ax + b (mod p)` with
    /// base point `generator` of order `order`.
    ///
    /// The modulus must be odd and greater than 3, all coefficients and coordinates must be
    /// reduced, the curve must be non-singular and the generator must lie on it. The modulus
    /// is assumed to be prime and the order is not checked against the generator; neither is
    /// feasible to verify cheaply.
    pub fn new(
        name: &'static str,
        modulus: U256,
        a: U256,
        b: U256,
        order: U256,
        generator: (U256, U256),
    ) -> Result<Self> {
        let odd_modulus =
            Option::<Odd<U256>>::from(Odd::new(modulus)).ok_or(Error::InvalidParameters)?;
        let nonzero_modulus = Option::<NonZero<U256>>::from(NonZero::new(modulus))
            .ok_or(Error::InvalidParameters)?;
        let order = Option::<NonZero<U256>>::from(NonZero::new(order))
            .ok_or(Error::InvalidParameters)?;

        if modulus <= U256::from_u8(3)
            || [a, b, generator.0, generator.1]
                .iter()
                .any(|value| value >= &modulus)
        {
            return Err(Error::InvalidParameters);
        }

        let monty = MontyParams::new(odd_modulus);
        let equation_a = MontyForm::new(&a, monty);
        let equation_b = MontyForm::new(&b, monty);

        // 4a³ + 27b² ≠ 0
        let four = MontyForm::new(&U256::from_u8(4), monty);
        let twenty_seven = MontyForm::new(&U256::from_u8(27), monty);
        let discriminant =
            four * equation_a.square() * equation_a + twenty_seven * equation_b.square();
        if discriminant.retrieve() == U256::ZERO {
            return Err(Error::InvalidParameters);
        }

        let gx = MontyForm::new(&generator.0, monty);
        let gy = MontyForm::new(&generator.1, monty);
        let rhs = gx.square() * gx + equation_a * gx + equation_b;
        if gy.square().retrieve() != rhs.retrieve() {
            return Err(Error::InvalidParameters);
        }

        let sqrt = SqrtAlgorithm::for_modulus(&odd_modulus, monty)?;

        Ok(Self {
            name,
            modulus: odd_modulus,
            order,
            a,
            b,
            generator,
            bit_size: modulus.bits(),
            nonzero_modulus,
            monty,
            equation_a,
            equation_b,
            inversion_exponent: modulus.wrapping_sub(&U256::from_u8(2)),
            sqrt,
        })
    }

    /// SM2 recommended curve parameters (GB/T 32918.5-2017).
    ///
    /// ```text
    /// p  = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF
    /// a  = p - 3
    /// b  = 0x28E9FA9E 9D9F5E34 4D5A9E4B CF6509A7 F39789F5 15AB8F92 DDBCBD41 4D940E93
    /// n  = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123
    /// Gₓ = 0x32C4AE2C 1F198119 5F990446 6A39C994 8FE30BBF F2660BE1 715A4589 334C74C7
    /// Gᵧ = 0xBC3736A2 F4F6779C 59BDCEE3 6B692153 D0A9877C C62A4740 02DF32E5 2139F0A0
    /// ```
    pub fn sm2() -> Self {
        Self::from_hex("sm2", sm2::P, sm2::A, sm2::B, sm2::N, (sm2::GX, sm2::GY))
    }

    /// The 256-bit example curve used throughout the worked examples of GM/T 0003-2012.
    pub fn sm2_test() -> Self {
        Self::from_hex(
            "sm2-test",
            sm2_test::P,
            sm2_test::A,
            sm2_test::B,
            sm2_test::N,
            (sm2_test::GX, sm2_test::GY),
        )
    }

    fn from_hex(
        name: &'static str,
        modulus: &str,
        a: &str,
        b: &str,
        order: &str,
        generator: (&str, &str),
    ) -> Self {
        Self::new(
            name,
            U256::from_be_hex(modulus),
            U256::from_be_hex(a),
            U256::from_be_hex(b),
            U256::from_be_hex(order),
            (
                U256::from_be_hex(generator.0),
                U256::from_be_hex(generator.1),
            ),
        )
        .expect("built-in curve parameters are valid")
    }

    /// Human-readable curve name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &U256 {
        self.modulus.as_ref()
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &U256 {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &U256 {
        &self.b
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &U256 {
        self.order.as_ref()
    }

    /// Affine coordinates `(Gₓ, Gᵧ)` of the base point.
    pub fn generator(&self) -> &(U256, U256) {
        &self.generator
    }

    /// Bit length of the modulus.
    pub fn bit_size(&self) -> u32 {
        self.bit_size
    }

    /// Length of a big-endian field element encoding for this curve.
    pub fn byte_size(&self) -> usize {
        self.bit_size.div_ceil(8) as usize
    }

    /// Generate a uniformly random scalar in `[1, n)`.
    #[cfg(feature = "rand_core")]
    pub fn random_scalar(&self, rng: &mut (impl CryptoRngCore + ?Sized)) -> U256 {
        loop {
            let k = U256::random_mod(rng, &self.order);
            if k != U256::ZERO {
                return k;
            }
        }
    }

    /// Do both parameter sets describe the same curve?
    pub(crate) fn same_curve(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self == other
    }
}

impl fmt::Debug for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveParams")
            .field("name", &self.name)
            .field("modulus", self.modulus())
            .field("a", &self.a)
            .field("b", &self.b)
            .field("order", self.order())
            .field("generator", &self.generator)
            .field("bit_size", &self.bit_size)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CurveParams {
    fn eq(&self, other: &Self) -> bool {
        self.modulus() == other.modulus()
            && self.a == other.a
            && self.b == other.b
            && self.order() == other.order()
            && self.generator == other.generator
    }
}

impl Eq for CurveParams {}
