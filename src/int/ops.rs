//! Checked arithmetic for bounded integers
//!
//! All operations follow value semantics: they borrow the receiver, compute
//! the exact result over `BigInt`, check it against the receiver's range
//! and return a new instance. The receiver is never modified, so a failed
//! operation leaves it exactly as it was.
//!
//! Division truncates toward zero. A zero divisor fails with
//! `DivisionByZero` before any range check.

use crate::bigmath;
use crate::error::{Error, Result};
use crate::int::core::{BoundedInt, FixedWidth};
use crate::source::Source;

use num_bigint::BigInt;
use num_traits::Zero;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

/// Applies `op` to `lhs` and the resolved `rhs`. The result is exact and
/// unchecked; each caller checks it against its own bounds.
///
/// `ty` names the caller in the `ReceivedFloat` diagnostic.
pub(crate) fn apply(ty: &'static str, lhs: &BigInt, op: Op, rhs: Source) -> Result<BigInt> {
    let rhs = rhs.into_integer(ty)?;

    Ok(match op {
        Op::Add => lhs + rhs,
        Op::Subtract => lhs - rhs,
        Op::Multiply => lhs * rhs,
        Op::Divide | Op::Remainder if rhs.is_zero() => return Err(Error::DivisionByZero),
        Op::Divide => lhs / rhs,
        Op::Remainder => lhs % rhs,
    })
}

impl<K: FixedWidth> BoundedInt<K> {
    fn apply(&self, op: Op, operand: impl Into<Source>) -> Result<Self> {
        apply(K::KIND.name(), &self.value, op, operand.into())
            .and_then(|value| K::KIND.check(value))
            .map(Self::from_checked)
    }

    pub fn add(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Add, operand)
    }

    pub fn subtract(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Subtract, operand)
    }

    pub fn multiply(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Multiply, operand)
    }

    /// Truncating division.
    pub fn divide(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Divide, operand)
    }

    /// Remainder of truncating division; takes the sign of the receiver.
    pub fn remainder(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Remainder, operand)
    }

    /// Raises the value to `exp`, checking the result like any other
    /// arithmetic.
    ///
    /// # Errors
    /// `AboveMaximum` / `BelowMinimum` when the power leaves the range. For
    /// `|value| >= 2` and `exp` of at least the bit width this is decided
    /// without computing the power, so the call stays cheap for any `exp`.
    pub fn pow(&self, exp: u32) -> Result<Self> {
        K::KIND.check_pow(&self.value, exp).map(Self::from_checked)
    }

    /// Absolute value. Fails for the minimum of a signed width, whose
    /// magnitude is one past the maximum.
    pub fn abs(&self) -> Result<Self> {
        K::KIND
            .check(bigmath::abs(&self.value))
            .map(Self::from_checked)
    }

    /// `-1`, `0` or `1`, always representable in the receiver's type.
    pub fn sign(&self) -> Self {
        Self::from_checked(bigmath::sign(&self.value))
    }
}
