// src/integer_math/gcd.rs

use num::{BigInt, Integer, One, Zero};

pub struct GCD;

impl GCD {
    /// Non-negative greatest common divisor of two integers of any sign.
    /// `gcd(0, 0)` is 0.
    pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        a.gcd(b)
    }

    /// Extended Euclidean algorithm: returns `(g, x, y)` with
    /// `g == x*a + y*b`. Quotients use floor division, so for negative
    /// inputs `g` carries whatever sign the recurrence produces; use
    /// [`GCD::gcd`] when the canonical non-negative divisor is wanted.
    pub fn gcd_bezout(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
        let (mut old_r, mut r) = (a.clone(), b.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
        let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

        while !r.is_zero() {
            let quotient = old_r.div_floor(&r);

            let next_r = &old_r - &quotient * &r;
            old_r = r;
            r = next_r;

            let next_s = &old_s - &quotient * &s;
            old_s = s;
            s = next_s;

            let next_t = &old_t - &quotient * &t;
            old_t = t;
            t = next_t;
        }

        (old_r, old_s, old_t)
    }

    /// True iff `gcd(a, b) == 1`.
    pub fn is_coprime(a: &BigInt, b: &BigInt) -> bool {
        Self::gcd(a, b).is_one()
    }

    /// Non-negative least common multiple. `lcm(x, 0)` is 0.
    pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
        a.lcm(b)
    }

    pub fn gcd_all(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::zero(), |acc, x| acc.gcd(x))
    }

    pub fn lcm_all(numbers: &[BigInt]) -> BigInt {
        numbers.iter().fold(BigInt::one(), |acc, x| acc.lcm(x))
    }
}
