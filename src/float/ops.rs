//! Checked arithmetic for bounded floats
//!
//! Same discipline as the integer operations: borrow the receiver, compute,
//! check the result against the receiver's width, return a new value.
//! An overflow to infinity is a range violation, and a zero divisor fails
//! with `DivisionByZero` instead of producing an infinity or NaN.

use crate::error::{Error, Result};
use crate::float::core::{BoundedFloat, FixedFloat, check};
use crate::source::Source;

impl<K: FixedFloat> BoundedFloat<K> {
    fn apply(&self, operand: impl Into<Source>, op: fn(f64, f64) -> f64) -> Result<Self> {
        let rhs = operand.into().into_f64()?;

        check(K::WIDTH, op(self.value, rhs)).map(Self::from_checked)
    }

    pub fn add(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(operand, |a, b| a + b)
    }

    pub fn subtract(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(operand, |a, b| a - b)
    }

    pub fn multiply(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(operand, |a, b| a * b)
    }

    pub fn divide(&self, operand: impl Into<Source>) -> Result<Self> {
        let rhs = operand.into().into_f64()?;

        if rhs == 0.0 {
            return Err(Error::DivisionByZero);
        }

        check(K::WIDTH, self.value / rhs).map(Self::from_checked)
    }
}
