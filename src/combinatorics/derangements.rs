// src/combinatorics/derangements.rs

use num::{BigInt, One, Zero};

/// Counts the derangements of `n` items, the permutations with no fixed
/// point.
///
/// Evaluates the recurrence `D(n) = (n - 1) * (D(n-1) + D(n-2))` with a
/// rolling pair of values, so only two intermediate counts are live at a
/// time. The magnitude grows factorially, hence the [`BigInt`] result.
///
/// Returns -1 for negative `n`, for which no derangement count exists.
///
/// # Examples
/// ```
/// use dmath::combinatorics::derange;
/// use num::BigInt;
///
/// assert_eq!(derange(4), BigInt::from(9));
/// assert_eq!(derange(5), BigInt::from(44));
/// ```
pub fn derange(n: i64) -> BigInt {
    match n {
        n if n < 0 => BigInt::from(-1),
        0 | 2 => BigInt::one(),
        1 => BigInt::zero(),
        _ => {
            // D(1) and D(2) seed the recurrence
            let mut prev2 = BigInt::zero();
            let mut prev1 = BigInt::one();
            for i in 3..=n {
                let current = (&prev1 + &prev2) * (i - 1);
                prev2 = prev1;
                prev1 = current;
            }
            prev1
        }
    }
}
