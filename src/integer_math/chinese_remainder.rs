// src/integer_math/chinese_remainder.rs

use log::debug;
use num::{BigInt, Integer, One, Signed, Zero};

use crate::error::Error;
use crate::integer_math::gcd::GCD;

pub struct ChineseRemainder;

impl ChineseRemainder {
    /// Solves the simultaneous congruence system
    /// `x ≡ remainders[i] (mod moduli[i])` over pairwise-coprime moduli.
    ///
    /// Returns `(solution, product)` where `product` is the product of all
    /// moduli and `solution` is the unique representative in `[0, product)`.
    /// The empty system yields `(0, 1)`.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] when the slices differ in length or any
    /// modulus is not positive; [`Error::NonCoprimeModuli`] when the inverse
    /// computation for a congruence finds a shared factor between its
    /// modulus and the rest of the system.
    pub fn solve(moduli: &[BigInt], remainders: &[BigInt]) -> Result<(BigInt, BigInt), Error> {
        if moduli.len() != remainders.len() {
            return Err(Error::InvalidInput {
                reason: format!(
                    "expected one remainder per modulus, got {} moduli and {} remainders",
                    moduli.len(),
                    remainders.len()
                ),
            });
        }
        if let Some(bad) = moduli.iter().find(|m| !m.is_positive()) {
            return Err(Error::InvalidInput {
                reason: format!("modulus {} is not positive", bad),
            });
        }

        let product: BigInt = moduli.iter().product();
        debug!(
            "Solving {} congruences, product of moduli = {}",
            moduli.len(),
            product
        );

        let mut solution = BigInt::zero();
        for (modulus, remainder) in moduli.iter().zip(remainders) {
            let partial = &product / modulus;
            let (g, inverse, _) = GCD::gcd_bezout(&partial, modulus);
            if !g.is_one() {
                return Err(Error::NonCoprimeModuli {
                    modulus: modulus.clone(),
                });
            }
            solution += remainder * &partial * inverse;
        }

        let solution = solution.mod_floor(&product);
        debug!("Congruence solution {} (mod {})", solution, product);
        Ok((solution, product))
    }
}
