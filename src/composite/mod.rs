//! Composite construction and promotion
//!
//! A composite integer is built from a `(high, low)` pair of words:
//!
//! ```text
//! value = (high << shift) + low
//! ```
//!
//! With the default [`ShiftPolicy::TargetWidth`], `shift` is the bit width
//! of the target container itself, not half of it. `(1, 0)` composed for a
//! 64-bit target is therefore `2^64`, which no longer fits 64 bits and is
//! promoted. [`ShiftPolicy::HalfWidth`] selects the conventional bit-packing
//! layout where the two words split the target in half.
//!
//! Once the value is known, the [`Composer`] picks the narrowest container
//! at or above the target width that holds it, up to 128 bits, and falls
//! back to the overflow container [`Biggest`] when none does.

mod cache;
mod engine;

pub use cache::CompositeCache;
pub use engine::{Composer, CompositeConfig};

use crate::biggest::Biggest;
use crate::bounds::{IntKind, Width};
use crate::int::Integer;

use num_bigint::BigInt;

/// How far the high word is shifted relative to the target width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShiftPolicy {
    /// Shift by the full target width.
    #[default]
    TargetWidth,

    /// Shift by half the target width.
    HalfWidth,
}

impl ShiftPolicy {
    pub const fn shift(self, target: Width) -> u32 {
        match self {
            ShiftPolicy::TargetWidth => target.bits(),
            ShiftPolicy::HalfWidth => target.bits() / 2,
        }
    }
}

/// Combines two words into `(high << shift) + low`.
pub fn combine(high: &BigInt, low: &BigInt, target: Width, policy: ShiftPolicy) -> BigInt {
    (high << policy.shift(target)) + low
}

/// Result of a composition: a fixed-width integer or the overflow
/// container.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Composite {
    Fixed(Integer),
    Biggest(Biggest),
}

impl Composite {
    /// Returns the exact composed value.
    pub fn value(&self) -> &BigInt {
        match self {
            Composite::Fixed(v) => v.value(),
            Composite::Biggest(v) => v.value(),
        }
    }

    /// Kind of the fixed container, `None` for the overflow container.
    pub fn kind(&self) -> Option<IntKind> {
        match self {
            Composite::Fixed(v) => v.kind(),
            Composite::Biggest(_) => None,
        }
    }

    /// Returns `true` if the value lies outside the signed 128-bit range.
    pub fn exceeds_fixed_width(&self) -> bool {
        match self {
            Composite::Fixed(v) => v.exceeds_fixed_width(),
            Composite::Biggest(v) => v.exceeds_fixed_width(),
        }
    }

    pub fn is_biggest(&self) -> bool {
        matches!(self, Composite::Biggest(_))
    }

    /// Consumes the result and returns the exact value.
    pub fn into_inner(self) -> BigInt {
        match self {
            Composite::Fixed(v) => v.into_inner(),
            Composite::Biggest(v) => v.into_inner(),
        }
    }
}
