//! Scalar multiplication.

use super::Point;
use crate::{BigInt, BigUint, Error, Result, U256};
use bigint::Limb;
use num_bigint::Sign;

/// Non-negative integers which can be used as scalars in [`Point::mul`].
pub trait ScalarBits {
    /// Number of significant bits: the position of the highest set bit, plus one.
    fn bit_len(&self) -> u64;

    /// Bit at `index`, counting from the least significant bit.
    fn bit(&self, index: u64) -> bool;
}

impl ScalarBits for u64 {
    fn bit_len(&self) -> u64 {
        u64::from(u64::BITS - self.leading_zeros())
    }

    fn bit(&self, index: u64) -> bool {
        index < u64::from(u64::BITS) && (self >> index) & 1 == 1
    }
}

impl ScalarBits for U256 {
    fn bit_len(&self) -> u64 {
        u64::from(self.bits())
    }

    fn bit(&self, index: u64) -> bool {
        let limb_bits = u64::from(Limb::BITS);

        usize::try_from(index / limb_bits)
            .ok()
            .and_then(|i| self.as_words().get(i))
            .is_some_and(|word| (word >> (index % limb_bits)) & 1 == 1)
    }
}

impl ScalarBits for BigUint {
    fn bit_len(&self) -> u64 {
        self.bits()
    }

    fn bit(&self, index: u64) -> bool {
        BigUint::bit(self, index)
    }
}

impl<'c> Point<'c> {
    /// Returns `[k] self`.
    ///
    /// Left-to-right double-and-add over the bits of `k`: one doubling per bit and one
    /// addition per set bit, so the cost grows with the bit length of `k`, not its magnitude.
    ///
    /// # ⚠️ Warning
    ///
    /// Branches on the bits of `k` and on intermediate points. Not suitable for secret scalars
    /// where timing is observable.
    pub fn mul<S>(&self, k: &S) -> Result<Self>
    where
        S: ScalarBits + ?Sized,
    {
        let mut acc = Self::Infinity;

        for i in (0..k.bit_len()).rev() {
            acc = acc.double()?;

            if k.bit(i) {
                acc = acc.add(self)?;
            }
        }

        Ok(acc)
    }

    /// Returns `[k] self` for an arbitrary-precision signed integer.
    ///
    /// Returns [`Error::NegativeScalar`] if `k < 0`.
    pub fn mul_bigint(&self, k: &BigInt) -> Result<Self> {
        if k.sign() == Sign::Minus {
            return Err(Error::NegativeScalar);
        }

        self.mul(k.magnitude())
    }
}
