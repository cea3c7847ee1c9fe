//! Runtime-typed integer
//!
//! `Integer` is what the width dispatcher returns when the width is only
//! known at runtime. It carries an optional [`IntKind`]:
//!
//! - `Some(kind)`: behaves like the matching `BoundedInt`, every result is
//!   checked against `kind`
//! - `None`: a generic integer with no width, used for non bit-exact work
//!   such as the results of float truncation. A generic integer is still
//!   signed or unsigned: an unsigned one has a lower bound of zero and no
//!   upper bound.
//!
//! An `Integer` can be narrowed back into a concrete `BoundedInt` with
//! `TryFrom`, which checks the value again against the target type.

use crate::bigmath;
use crate::bounds::IntKind;
use crate::error::{Error, Result};
use crate::int::core::{BoundedInt, FixedWidth, exceeds_fixed_width};
use crate::int::ops::{Op, apply};
use crate::source::Source;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Integer {
    value: BigInt,
    kind: Option<IntKind>,
    signed: bool,
}

impl Integer {
    /// Builds an integer of the given kind, or a signed generic one for
    /// `None`.
    ///
    /// # Errors
    /// The same errors as [`BoundedInt::new`] for `Some(kind)`; only input
    /// errors for `None`.
    pub fn from_source(source: impl Into<Source>, kind: Option<IntKind>) -> Result<Self> {
        let signed = kind.is_none_or(|k| k.signed);

        Self::bounded(source.into(), kind, signed)
    }

    /// Builds a generic integer with no upper bound. An unsigned one still
    /// rejects negative values with `BelowMinimum`.
    pub fn unbounded(source: impl Into<Source>, signed: bool) -> Result<Self> {
        Self::bounded(source.into(), None, signed)
    }

    /// Builds a signed generic integer with no width bound.
    pub fn generic(source: impl Into<Source>) -> Result<Self> {
        Self::unbounded(source, true)
    }

    /// Returns `true` exactly when [`Integer::from_source`] would succeed.
    pub fn is_valid(source: impl Into<Source>, kind: Option<IntKind>) -> bool {
        Self::from_source(source, kind).is_ok()
    }

    fn bounded(source: Source, kind: Option<IntKind>, signed: bool) -> Result<Self> {
        let ty = name(kind, signed);
        let value = check(kind, signed, source.into_integer(ty)?)?;

        Ok(Self {
            value,
            kind,
            signed,
        })
    }

    pub(crate) fn from_checked(value: BigInt, kind: Option<IntKind>) -> Self {
        Self {
            value,
            kind,
            signed: kind.is_none_or(|k| k.signed),
        }
    }

    fn with_value(&self, value: BigInt) -> Self {
        Self {
            value,
            kind: self.kind,
            signed: self.signed,
        }
    }

    /// Returns the exact value.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Consumes the integer and returns the exact value.
    pub fn into_inner(self) -> BigInt {
        self.value
    }

    /// Returns the width and signedness this integer is bound to, or
    /// `None` for a generic integer.
    pub fn kind(&self) -> Option<IntKind> {
        self.kind
    }

    /// Returns `false` for unsigned integers, generic or fixed.
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Returns `true` if the value lies outside the signed 128-bit range.
    pub fn exceeds_fixed_width(&self) -> bool {
        exceeds_fixed_width(&self.value)
    }

    /// Narrows into a concrete bounded type.
    ///
    /// # Errors
    /// `BelowMinimum` / `AboveMaximum` if the value does not fit `K`.
    pub fn narrow<K: FixedWidth>(self) -> Result<BoundedInt<K>> {
        BoundedInt::try_from(self)
    }

    fn apply(&self, op: Op, operand: impl Into<Source>) -> Result<Self> {
        let value = apply(name(self.kind, self.signed), &self.value, op, operand.into())?;

        check(self.kind, self.signed, value).map(|value| self.with_value(value))
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

    /// Raises the value to `exp`. With a kind this fails fast, like
    /// [`BoundedInt::pow`]; a generic integer computes the exact power.
    pub fn pow(&self, exp: u32) -> Result<Self> {
        let value = match self.kind {
            Some(kind) => kind.check_pow(&self.value, exp)?,
            None => check(None, self.signed, bigmath::pow(&self.value, exp))?,
        };

        Ok(self.with_value(value))
    }

    pub fn abs(&self) -> Result<Self> {
        check(self.kind, self.signed, bigmath::abs(&self.value)).map(|value| self.with_value(value))
    }

    pub fn sign(&self) -> Self {
        self.with_value(bigmath::sign(&self.value))
    }
}

fn name(kind: Option<IntKind>, signed: bool) -> &'static str {
    match kind {
        Some(kind) => kind.name(),
        None if signed => "Integer",
        None => "Uint",
    }
}

/// Checks `value` against `kind`, or against the zero floor of an unsigned
/// generic integer.
fn check(kind: Option<IntKind>, signed: bool, value: BigInt) -> Result<BigInt> {
    match kind {
        Some(kind) => kind.check(value),
        None if !signed && value.is_negative() => {
            tracing::debug!(ty = "Uint", %value, "value below minimum");

            Err(Error::BelowMinimum {
                ty: "Uint",
                value: value.into(),
                min: BigInt::zero().into(),
            })
        }
        None => Ok(value),
    }
}

/// Returns `true` if `source` is a whole number, with no width bound.
pub fn is_int(source: impl Into<Source>) -> bool {
    source.into().is_whole()
}

impl<K: FixedWidth> From<BoundedInt<K>> for Integer {
    fn from(value: BoundedInt<K>) -> Self {
        Self::from_checked(value.value, Some(K::KIND))
    }
}

impl<K: FixedWidth> TryFrom<Integer> for BoundedInt<K> {
    type Error = Error;

    fn try_from(value: Integer) -> Result<Self> {
        K::KIND.check(value.value).map(Self::from_checked)
    }
}

impl From<Integer> for Source {
    fn from(value: Integer) -> Self {
        Source::Integer(value.value)
    }
}

impl From<&Integer> for Source {
    fn from(value: &Integer) -> Self {
        Source::Integer(value.value.clone())
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
