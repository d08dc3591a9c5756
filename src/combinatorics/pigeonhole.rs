// src/combinatorics/pigeonhole.rs

use crate::error::Error;
use num::{BigInt, Integer, Signed};

/// Smallest per-box maximum forced by the pigeonhole principle: distributing
/// `items` across `boxes` guarantees some box holds at least
/// `ceil(items / boxes)`.
///
/// # Errors
/// `Error::InvalidInput` when `boxes <= 0`.
///
/// # Examples
/// ```
/// use dmath::combinatorics::pigeon_hole;
/// use num::BigInt;
///
/// let least = pigeon_hole(&BigInt::from(10), &BigInt::from(3)).unwrap();
/// assert_eq!(least, BigInt::from(4));
/// ```
pub fn pigeon_hole(items: &BigInt, boxes: &BigInt) -> Result<BigInt, Error> {
    if !boxes.is_positive() {
        return Err(Error::InvalidInput {
            reason: format!("cannot distribute items across {} boxes", boxes),
        });
    }
    Ok(items.div_ceil(boxes))
}

/// Inverse direction of the pigeonhole bound: with at most `max_per_box`
/// items allowed in each of `boxes` boxes, `max_per_box * boxes` items can
/// be placed before some box must exceed its maximum.
///
/// # Errors
/// `Error::InvalidInput` when either count is negative.
///
/// # Examples
/// ```
/// use dmath::combinatorics::pigeon_hole_reverse;
/// use num::BigInt;
///
/// let most = pigeon_hole_reverse(&BigInt::from(10), &BigInt::from(3)).unwrap();
/// assert_eq!(most, BigInt::from(30));
/// ```
pub fn pigeon_hole_reverse(max_per_box: &BigInt, boxes: &BigInt) -> Result<BigInt, Error> {
    if max_per_box.is_negative() || boxes.is_negative() {
        return Err(Error::InvalidInput {
            reason: format!(
                "per-box capacity {} and box count {} must both be non-negative",
                max_per_box, boxes
            ),
        });
    }
    Ok(max_per_box * boxes)
}
