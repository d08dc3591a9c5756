// src/combinatorics/binomial.rs

use num::{BigInt, One, Zero};

/// Computes the binomial coefficient C(n, k), the number of ways to choose
/// `k` items from `n` without regard to order.
///
/// Uses the multiplicative formula with the symmetry reduction
/// `k = min(k, n - k)`; every partial product is exactly divisible by its
/// step divisor, so the whole computation stays in integer arithmetic.
///
/// Returns 0 when `k < 0` or `k > n`, and 1 when `k == 0` or `k == n`.
///
/// # Examples
/// ```
/// use dmath::combinatorics::choose;
/// use num::BigInt;
///
/// assert_eq!(choose(5, 2), BigInt::from(10));
/// assert_eq!(choose(10, 5), BigInt::from(252));
/// ```
pub fn choose(n: i64, k: i64) -> BigInt {
    if k < 0 || k > n {
        return BigInt::zero();
    }
    if k == 0 || k == n {
        return BigInt::one();
    }
    let k = k.min(n - k); // Take advantage of symmetry
    let mut c = BigInt::one();
    for i in 0..k {
        c = c * (n - i) / (i + 1);
    }
    c
}

/// Alias of [`choose`].
pub fn binom(n: i64, k: i64) -> BigInt {
    choose(n, k)
}

/// Number of ordered arrangements of `k` items drawn from `n`: the falling
/// factorial `n * (n-1) * ... * (n-k+1)`.
///
/// Returns 0 when `k < 0` or `k > n`. `permutation(n, n)` is `n!`.
///
/// # Examples
/// ```
/// use dmath::combinatorics::permutation;
/// use num::BigInt;
///
/// assert_eq!(permutation(5, 2), BigInt::from(20));
/// assert_eq!(permutation(4, 4), BigInt::from(24));
/// ```
pub fn permutation(n: i64, k: i64) -> BigInt {
    if k < 0 || k > n {
        return BigInt::zero();
    }
    let mut count = BigInt::one();
    for i in 0..k {
        count *= n - i;
    }
    count
}
