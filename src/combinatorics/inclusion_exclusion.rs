// src/combinatorics/inclusion_exclusion.rs

use num::BigInt;

/// Size of the union of `set_count` sets of equal `size` under a uniform
/// overlap model.
///
/// `overlaps[0]` is the size shared by every pair of sets, `overlaps[1]`
/// by every triple, and `overlaps[2]` by every quadruple. Intersections of
/// five or more sets are not modeled. The alternating sum weights each
/// overlap by the number of ways to pick that many sets:
///
/// `n * size - C(n,2) * overlaps[0] + C(n,3) * overlaps[1] - C(n,4) * overlaps[2]`
///
/// Only the terms with enough sets participate, so two sets read one
/// overlap entry and four or more read all three.
///
/// # Panics
/// Panics when `overlaps` is shorter than the active terms require.
///
/// # Examples
/// ```
/// use dmath::combinatorics::inclusion_exclusion;
/// use num::BigInt;
///
/// let overlaps = [BigInt::from(50), BigInt::from(25), BigInt::from(5)];
/// assert_eq!(
///     inclusion_exclusion(4, &BigInt::from(200), &overlaps),
///     BigInt::from(595)
/// );
/// ```
pub fn inclusion_exclusion(set_count: i64, size: &BigInt, overlaps: &[BigInt]) -> BigInt {
    let n = set_count;
    let mut total = size * n;
    if n >= 2 {
        let pairs = BigInt::from(n) * (n - 1) / 2;
        total -= pairs * &overlaps[0];
    }
    if n >= 3 {
        let triples = BigInt::from(n) * (n - 1) * (n - 2) / 6;
        total += triples * &overlaps[1];
    }
    if n >= 4 {
        let quadruples = BigInt::from(n) * (n - 1) * (n - 2) * (n - 3) / 24;
        total -= quadruples * &overlaps[2];
    }
    total
}
