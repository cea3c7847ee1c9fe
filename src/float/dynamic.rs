//! Runtime-width float
//!
//! [`Float`] is what the float dispatcher returns when the width is only
//! known at runtime. It wraps one of the fixed float types and forwards
//! every operation to it, so results keep the width they started with.

use crate::bounds::FloatWidth;
use crate::error::Result;
use crate::float::core::{Float32, Float64};
use crate::int::Integer;
use crate::source::Source;

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub enum Float {
    Float32(Float32),
    Float64(Float64),
}

macro_rules! forward {
    ($($name:ident),*) => {
        $(
            pub fn $name(&self, operand: impl Into<Source>) -> Result<Self> {
                match self {
                    Float::Float32(v) => v.$name(operand).map(Float::Float32),
                    Float::Float64(v) => v.$name(operand).map(Float::Float64),
                }
            }
        )*
    };
}

impl Float {
    /// Builds a float of the given width.
    ///
    /// # Errors
    /// The errors of [`crate::float::BoundedFloat::new`] for that width.
    pub fn new(source: impl Into<Source>, width: FloatWidth) -> Result<Self> {
        match width {
            FloatWidth::W32 => Float32::new(source).map(Float::Float32),
            FloatWidth::W64 => Float64::new(source).map(Float::Float64),
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> f64 {
        match self {
            Float::Float32(v) => v.value(),
            Float::Float64(v) => v.value(),
        }
    }

    /// Returns the width this value is bound to.
    pub fn width(&self) -> FloatWidth {
        match self {
            Float::Float32(_) => FloatWidth::W32,
            Float::Float64(_) => FloatWidth::W64,
        }
    }

    forward!(add, subtract, multiply, divide);

    /// Fractional part, in the same width.
    pub fn fract(&self) -> Self {
        match self {
            Float::Float32(v) => Float::Float32(v.fract()),
            Float::Float64(v) => Float::Float64(v.fract()),
        }
    }

    pub fn trunc(&self) -> Result<Integer> {
        Integer::generic(self.value().trunc())
    }

    pub fn ceil(&self) -> Result<Integer> {
        Integer::generic(self.value().ceil())
    }

    pub fn floor(&self) -> Result<Integer> {
        Integer::generic(self.value().floor())
    }
}

/// Width dispatcher: builds a float of the given width, or a `Float64`
/// when `width` is `None`.
pub fn from(source: impl Into<Source>, width: Option<FloatWidth>) -> Result<Float> {
    Float::new(source, width.unwrap_or(FloatWidth::W64))
}

impl From<Float32> for Float {
    fn from(value: Float32) -> Self {
        Float::Float32(value)
    }
}

impl From<Float64> for Float {
    fn from(value: Float64) -> Self {
        Float::Float64(value)
    }
}

impl From<Float> for f64 {
    fn from(value: Float) -> Self {
        value.value()
    }
}

impl From<Float> for Source {
    fn from(value: Float) -> Self {
        Source::Float(value.value())
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
