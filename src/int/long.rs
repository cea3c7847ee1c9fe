//! Auto-sized `Long`
//!
//! A `Long` holds an `Int32` when the value fits one and an `Int64`
//! otherwise. Arithmetic on a `Long` widens to `Int128`, so the sum or
//! product of two longs never overflows the operand width.

use crate::error::Result;
use crate::int::core::{Int32, Int64, Int128};
use crate::source::Source;

use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Long {
    Int32(Int32),
    Int64(Int64),
}

impl Long {
    /// Tries `Int32` first, then `Int64`. The error reported is the one
    /// from the 64-bit attempt.
    pub fn new(source: impl Into<Source>) -> Result<Self> {
        let source = source.into();

        match Int32::new(source.clone()) {
            Ok(value) => Ok(Long::Int32(value)),
            Err(_) => Int64::new(source).map(Long::Int64),
        }
    }

    /// Tries `Int32::from_words`, then `Int64::from_words`.
    pub fn from_words(high: impl Into<Source>, low: impl Into<Source>) -> Result<Self> {
        let (high, low) = (high.into(), low.into());

        match Int32::from_words(high.clone(), low.clone()) {
            Ok(value) => Ok(Long::Int32(value)),
            Err(_) => Int64::from_words(high, low).map(Long::Int64),
        }
    }

    /// Returns `true` exactly when [`Long::new`] would succeed.
    pub fn is_valid(source: impl Into<Source>) -> bool {
        let source = source.into();

        Int32::is_valid(source.clone()) || Int64::is_valid(source)
    }

    pub fn is_32_bits(&self) -> bool {
        matches!(self, Long::Int32(_))
    }

    pub fn is_64_bits(&self) -> bool {
        matches!(self, Long::Int64(_))
    }

    /// Returns the exact value, whichever width holds it.
    pub fn value(&self) -> &BigInt {
        match self {
            Long::Int32(v) => v.value(),
            Long::Int64(v) => v.value(),
        }
    }

    fn widen(&self) -> Int128 {
        Int128::from_checked(self.value().clone())
    }

    /// Adds in 128 bits. The other operations below widen the same way.
    pub fn add(&self, operand: impl Into<Source>) -> Result<Int128> {
        self.widen().add(operand)
    }

    pub fn subtract(&self, operand: impl Into<Source>) -> Result<Int128> {
        self.widen().subtract(operand)
    }

    pub fn multiply(&self, operand: impl Into<Source>) -> Result<Int128> {
        self.widen().multiply(operand)
    }

    pub fn divide(&self, operand: impl Into<Source>) -> Result<Int128> {
        self.widen().divide(operand)
    }
}

impl From<Int32> for Long {
    fn from(value: Int32) -> Self {
        Long::Int32(value)
    }
}

impl From<Int64> for Long {
    fn from(value: Int64) -> Self {
        Long::Int64(value)
    }
}

impl From<&Long> for Source {
    fn from(value: &Long) -> Self {
        Source::Integer(value.value().clone())
    }
}

impl From<Long> for Source {
    fn from(value: Long) -> Self {
        Source::Integer(value.value().clone())
    }
}

impl Display for Long {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
