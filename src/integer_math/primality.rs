// src/integer_math/primality.rs

use log::debug;
use num::{BigInt, Integer, One, ToPrimitive, Zero};

pub struct Primality;

impl Primality {
    const WITNESS_BASES: [u32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    /// Deterministic primality check by trial division with odd divisors up
    /// to `floor(sqrt(n))`. False for every `n <= 1`.
    pub fn is_prime(n: &BigInt) -> bool {
        if n <= &BigInt::one() {
            return false;
        }
        let two = BigInt::from(2);
        if n.is_even() {
            return n == &two;
        }

        let sqrt_n = n.sqrt();
        if let Some(bound) = sqrt_n.to_u64() {
            debug!("Trial division: checking odd divisors up to {}", bound);
            let mut divisor = 3u64;
            while divisor <= bound {
                if n.is_multiple_of(&BigInt::from(divisor)) {
                    return false;
                }
                divisor += 2;
            }
        } else {
            let mut divisor = BigInt::from(3);
            while &divisor <= &sqrt_n {
                if n.is_multiple_of(&divisor) {
                    return false;
                }
                divisor += &two;
            }
        }

        true
    }

    /// Miller-Rabin over a fixed set of witness bases. Much faster than
    /// [`Primality::is_prime`] for large candidates.
    pub fn is_probable_prime(n: &BigInt) -> bool {
        let two = BigInt::from(2);
        if n < &two {
            return false;
        }
        if n == &two || n == &BigInt::from(3) {
            return true;
        }
        if n.is_even() {
            return false;
        }

        // n - 1 = d * 2^s with d odd
        let n_minus_one: BigInt = n - 1;
        let mut d = n_minus_one.clone();
        let mut s = 0u32;
        while d.is_even() {
            d /= 2;
            s += 1;
        }

        'witnesses: for &base in Self::WITNESS_BASES.iter() {
            let a = BigInt::from(base);
            if (&a % n).is_zero() {
                continue;
            }
            let mut x = a.modpow(&d, n);
            if x.is_one() || x == n_minus_one {
                continue;
            }
            for _ in 1..s {
                x = x.modpow(&two, n);
                if x == n_minus_one {
                    continue 'witnesses;
                }
            }
            return false;
        }

        true
    }

    /// Smallest prime strictly greater than `from`.
    pub fn next_prime(from: &BigInt) -> BigInt {
        let two = BigInt::from(2);
        if from < &two {
            return two;
        }
        let mut candidate: BigInt = from + 1;
        if candidate.is_even() {
            candidate += 1;
        }
        while !Self::is_probable_prime(&candidate) {
            candidate += 2;
        }
        candidate
    }
}
