//! Arbitrary-precision helpers
//!
//! `std` offers `pow`, `abs`, `signum`, `min` and `max` for native integers
//! only. These are the same operations over `BigInt`, used by every bounded
//! type before it re-checks its range.

use num_bigint::BigInt;
use num_traits::Signed;

/// Raises `base` to `exp`.
pub fn pow(base: &BigInt, exp: u32) -> BigInt {
    num_traits::pow(base.clone(), exp as usize)
}

pub fn abs(x: &BigInt) -> BigInt {
    x.abs()
}

/// Returns `-1`, `0` or `1` according to the sign of `x`.
pub fn sign(x: &BigInt) -> BigInt {
    x.signum()
}

/// Smallest of `values`, or `None` when the slice is empty.
pub fn min(values: &[BigInt]) -> Option<BigInt> {
    values.iter().min().cloned()
}

/// Largest of `values`, or `None` when the slice is empty.
pub fn max(values: &[BigInt]) -> Option<BigInt> {
    values.iter().max().cloned()
}
