//! Fixed-width bounded float
//!
//! `BoundedFloat<K>` stores an `f64` that is finite and within the
//! magnitude bounds of `K`. The constructors also classify the input: an
//! integral value handed to a float type is reported as `ReceivedInteger`,
//! unless it lies beyond `MAX_SAFE_INTEGER`, where integers and floats can
//! no longer be told apart.
//!
//! The classification applies to inputs only. Results of arithmetic, and
//! the fractional part of a value, may be integral.

use crate::bounds::FloatWidth;
use crate::error::{Error, Magnitude, Result};
use crate::int::Integer;
use crate::source::{Numeric, Source, beyond_safe, is_safe_integral};

use num_bigint::Sign;
use num_traits::ToPrimitive;
use std::fmt::Debug;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Marker for a concrete float width.
pub trait FixedFloat: sealed::Sealed + Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    const WIDTH: FloatWidth;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct F32;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct F64;

impl sealed::Sealed for F32 {}
impl sealed::Sealed for F64 {}

impl FixedFloat for F32 {
    const WIDTH: FloatWidth = FloatWidth::W32;
}

impl FixedFloat for F64 {
    const WIDTH: FloatWidth = FloatWidth::W64;
}

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct BoundedFloat<K: FixedFloat> {
    pub(crate) value: f64,
    width: PhantomData<K>,
}

pub type Float32 = BoundedFloat<F32>;
pub type Float64 = BoundedFloat<F64>;
pub type Double = Float64;

impl<K: FixedFloat> BoundedFloat<K> {
    /// Builds a value from text, a native float, or a large integer.
    ///
    /// # Errors
    /// - `NotANumber` for NaN, infinities and unparseable text
    /// - `ReceivedInteger` for integral inputs within `MAX_SAFE_INTEGER`
    /// - `BelowMinimum` / `AboveMaximum` outside this width's bounds
    pub fn new(source: impl Into<Source>) -> Result<Self> {
        validate(source.into(), K::WIDTH).map(Self::from_checked)
    }

    /// Returns `true` exactly when [`BoundedFloat::new`] would succeed.
    pub fn is_valid(source: impl Into<Source>) -> bool {
        validate(source.into(), K::WIDTH).is_ok()
    }

    pub(crate) fn from_checked(value: f64) -> Self {
        Self {
            value,
            width: PhantomData,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The value rounded to single precision.
    pub fn to_f32(&self) -> f32 {
        self.value as f32
    }

    pub const fn width() -> FloatWidth {
        K::WIDTH
    }

    /// Fractional part, `value - floor(value)`, always in `[0, 1)`.
    pub fn fract(&self) -> Self {
        Self::from_checked(self.value - self.value.floor())
    }

    /// Integer part, rounding toward zero, as a generic integer.
    pub fn trunc(&self) -> Result<Integer> {
        Integer::generic(self.value.trunc())
    }

    pub fn ceil(&self) -> Result<Integer> {
        Integer::generic(self.value.ceil())
    }

    pub fn floor(&self) -> Result<Integer> {
        Integer::generic(self.value.floor())
    }
}

fn validate(source: Source, width: FloatWidth) -> Result<f64> {
    let ty = width.name();

    let value = match source.into_numeric()? {
        Numeric::Whole(value) if beyond_safe(&value) => value.to_f64().unwrap_or(
            if value.sign() == Sign::Minus {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
        ),
        Numeric::Whole(value) => {
            return Err(Error::ReceivedInteger {
                ty,
                value: value.into(),
            });
        }
        Numeric::Real(value) if is_safe_integral(value) => {
            return Err(Error::ReceivedInteger {
                ty,
                value: Magnitude::Float(value),
            });
        }
        Numeric::Real(value) => value,
    };

    check(width, value)
}

/// Range check shared by construction and arithmetic. Infinities are
/// reported as range violations, NaN as `NotANumber`.
pub(crate) fn check(width: FloatWidth, value: f64) -> Result<f64> {
    let ty = width.name();

    if value.is_nan() {
        return Err(Error::NotANumber(value.to_string()));
    }

    if value < width.min() {
        tracing::debug!(ty, value, "float below minimum");

        return Err(Error::BelowMinimum {
            ty,
            value: value.into(),
            min: width.min().into(),
        });
    }

    if value > width.max() {
        tracing::debug!(ty, value, "float above maximum");

        return Err(Error::AboveMaximum {
            ty,
            value: value.into(),
            max: width.max().into(),
        });
    }

    Ok(value)
}

/// Returns `true` if `source` is a finite, non-integral number (or an
/// integral one beyond `MAX_SAFE_INTEGER`) within `width`, or within the
/// full `f64` range when `width` is `None`.
pub fn is_float(source: impl Into<Source>, width: Option<FloatWidth>) -> bool {
    validate(source.into(), width.unwrap_or(FloatWidth::W64)).is_ok()
}

impl<K: FixedFloat> From<BoundedFloat<K>> for f64 {
    fn from(value: BoundedFloat<K>) -> Self {
        value.value
    }
}

impl<K: FixedFloat> From<BoundedFloat<K>> for Source {
    fn from(value: BoundedFloat<K>) -> Self {
        Source::Float(value.value)
    }
}

impl<K: FixedFloat> From<&BoundedFloat<K>> for Source {
    fn from(value: &BoundedFloat<K>) -> Self {
        Source::Float(value.value)
    }
}

impl<K: FixedFloat> std::str::FromStr for BoundedFloat<K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<K: FixedFloat> std::fmt::Display for BoundedFloat<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<K: FixedFloat> TryFrom<f64> for BoundedFloat<K> {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}
