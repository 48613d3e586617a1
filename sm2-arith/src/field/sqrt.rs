//! Modular square roots for an arbitrary odd prime modulus.
//!
//! Adapted from <https://eprint.iacr.org/2012/685.pdf>, with the algorithm selected at run time
//! from the residue class of the modulus.

use crate::{Error, LIMBS, Result};
use bigint::{
    Odd, U256,
    modular::{MontyForm, MontyParams},
};

/// Upper bound on the search for a quadratic non-residue.
///
/// The least non-residue of a prime is tiny in practice; running past this bound means the
/// modulus is not prime.
const MAX_NON_RESIDUE: u64 = 1 << 16;

/// Square root algorithm chosen for a particular modulus, with its precomputed constants.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SqrtAlgorithm {
    /// Shanks algorithm for `p ≡ 3 (mod 4)`: `√a = a^((p + 1) / 4)`.
    Shanks {
        /// `(p + 1) / 4`
        exponent: U256,
    },

    /// Tonelli-Shanks algorithm for any odd prime, with `p - 1 = q·2ˢ` and `q` odd.
    TonelliShanks {
        s: u32,
        q: U256,
        /// `(q + 1) / 2`
        q_plus_one_over_two: U256,
        /// `zᵠ` for a fixed quadratic non-residue `z`
        root_of_unity: MontyForm<LIMBS>,
    },
}

impl SqrtAlgorithm {
    /// Determine the algorithm to use with `p` and precompute its constants.
    pub(crate) fn for_modulus(p: &Odd<U256>, monty: MontyParams<LIMBS>) -> Result<Self> {
        let p = p.as_ref();

        if p.as_words()[0] & 3 == 3 {
            // p ≡ 3 (mod 4), so (p + 1) / 4 = ⌊p / 4⌋ + 1 without overflowing
            return Ok(Self::Shanks {
                exponent: (*p >> 2u32).wrapping_add(&U256::ONE),
            });
        }

        let p_minus_one = p.wrapping_sub(&U256::ONE);
        let s = p_minus_one.trailing_zeros();
        let q = p_minus_one >> s;
        let z = find_non_residue(p, monty)?;

        Ok(Self::TonelliShanks {
            s,
            q,
            q_plus_one_over_two: (q >> 1u32).wrapping_add(&U256::ONE),
            root_of_unity: z.pow(&q),
        })
    }

    /// Compute some square root of `a`, or fail if `a` is a non-residue.
    pub(crate) fn sqrt(&self, a: &MontyForm<LIMBS>) -> Result<MontyForm<LIMBS>> {
        match self {
            Self::Shanks { exponent } => {
                let root = a.pow(exponent);
                if root.square().retrieve() == a.retrieve() {
                    Ok(root)
                } else {
                    Err(Error::NoSquareRoot)
                }
            }
            Self::TonelliShanks {
                s,
                q,
                q_plus_one_over_two,
                root_of_unity,
            } => tonelli_shanks(a, *s, q, q_plus_one_over_two, root_of_unity),
        }
    }
}

/// Tonelli-Shanks, variable time.
fn tonelli_shanks(
    a: &MontyForm<LIMBS>,
    s: u32,
    q: &U256,
    q_plus_one_over_two: &U256,
    root_of_unity: &MontyForm<LIMBS>,
) -> Result<MontyForm<LIMBS>> {
    if a.retrieve() == U256::ZERO {
        return Ok(*a);
    }

    let mut m = s;
    let mut c = *root_of_unity;
    let mut t = a.pow(q);
    let mut r = a.pow(q_plus_one_over_two);

    while t.retrieve() != U256::ONE {
        // least i in (0, m) such that t^(2^i) = 1
        let mut i = 0;
        let mut t_pow = t;
        while t_pow.retrieve() != U256::ONE {
            t_pow = t_pow.square();
            i += 1;
            if i == m {
                return Err(Error::NoSquareRoot);
            }
        }

        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = b.square();
        }

        m = i;
        c = b.square();
        t = t * c;
        r = r * b;
    }

    Ok(r)
}

/// Find the least quadratic non-residue `z ≥ 2` using Euler's criterion.
fn find_non_residue(p: &U256, monty: MontyParams<LIMBS>) -> Result<MontyForm<LIMBS>> {
    let p_minus_one = p.wrapping_sub(&U256::ONE);
    let euler_exponent = p_minus_one >> 1u32;

    for candidate in 2..MAX_NON_RESIDUE {
        let z = MontyForm::new(&U256::from_u64(candidate), monty);
        let legendre = z.pow(&euler_exponent).retrieve();

        if legendre == p_minus_one {
            return Ok(z);
        }

        if legendre != U256::ONE {
            // neither ±1: the modulus is composite
            return Err(Error::InvalidParameters);
        }
    }

    Err(Error::InvalidParameters)
}
