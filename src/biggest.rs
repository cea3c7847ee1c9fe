//! Overflow container
//!
//! `Biggest` holds an integer of any magnitude. It is the only type in the
//! crate without range checks: it exists to carry values that no fixed
//! width can hold. Callers that need a fixed width check
//! [`Biggest::exceeds_fixed_width`] and turn a `true` into their own error.

use crate::bigmath;
use crate::bounds::Width;
use crate::composite::{ShiftPolicy, combine};
use crate::error::Result;
use crate::int::{Int128, Op, apply, exceeds_fixed_width};
use crate::source::Source;

use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Biggest(BigInt);

impl Biggest {
    /// Builds a value from any whole-number input, with no range check.
    ///
    /// # Errors
    /// `NotANumber`, `NotAnInteger` or `ReceivedFloat` if the input is not
    /// a whole number.
    pub fn new(source: impl Into<Source>) -> Result<Self> {
        source.into().into_integer("Biggest").map(Biggest)
    }

    /// Builds `(high << width) + low`, shifting by 128 bits when `width` is
    /// `None`.
    pub fn from_words(
        high: impl Into<Source>,
        low: impl Into<Source>,
        width: Option<Width>,
    ) -> Result<Self> {
        let high = high.into().into_word()?;
        let low = low.into().into_word()?;

        Ok(Biggest(combine(
            &high,
            &low,
            width.unwrap_or(Width::W128),
            ShiftPolicy::TargetWidth,
        )))
    }

    /// Returns the exact value.
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the container and returns the exact value.
    pub fn into_inner(self) -> BigInt {
        self.0
    }

    /// Returns `true` if the value is outside `[i128::MIN, i128::MAX]`.
    ///
    /// Values below `i128::MIN` count as well as values above `i128::MAX`,
    /// so a negative composite too wide for 128 bits is flagged like a
    /// positive one.
    pub fn exceeds_fixed_width(&self) -> bool {
        exceeds_fixed_width(&self.0)
    }

    /// Alias of [`Biggest::exceeds_fixed_width`]: `true` on either side of
    /// the signed 128-bit range, not only above `i128::MAX`.
    pub fn is_really_biggest(&self) -> bool {
        self.exceeds_fixed_width()
    }

    /// Returns `true` if `source` is an integer no fixed width can hold.
    pub fn is_biggest(source: impl Into<Source>) -> bool {
        source
            .into()
            .into_integer("Biggest")
            .is_ok_and(|value| exceeds_fixed_width(&value))
    }

    /// Returns `true` if `source` fits an `Int128`.
    pub fn is_bigger(source: impl Into<Source>) -> bool {
        Int128::is_valid(source)
    }

    fn apply(&self, op: Op, operand: impl Into<Source>) -> Result<Self> {
        apply("Biggest", &self.0, op, operand.into()).map(Biggest)
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

    pub fn divide(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Divide, operand)
    }

    pub fn remainder(&self, operand: impl Into<Source>) -> Result<Self> {
        self.apply(Op::Remainder, operand)
    }

    /// Exact power. There is no bound to stop at, so the cost grows with
    /// `exp`.
    pub fn pow(&self, exp: u32) -> Self {
        Biggest(bigmath::pow(&self.0, exp))
    }

    pub fn abs(&self) -> Self {
        Biggest(bigmath::abs(&self.0))
    }

    pub fn sign(&self) -> Self {
        Biggest(bigmath::sign(&self.0))
    }
}

impl From<BigInt> for Biggest {
    fn from(value: BigInt) -> Self {
        Biggest(value)
    }
}

impl From<Biggest> for Source {
    fn from(value: Biggest) -> Self {
        Source::Integer(value.0)
    }
}

impl From<&Biggest> for Source {
    fn from(value: &Biggest) -> Self {
        Source::Integer(value.0.clone())
    }
}

impl Display for Biggest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
