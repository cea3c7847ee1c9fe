//! Width and bounds registry
//!
//! This module is the single source of truth for the representable range of
//! every type in the crate. Integer bounds are exact and derived from the
//! bit width:
//!
//! - signed:   `-2^(w-1) ..= 2^(w-1) - 1`
//! - unsigned: `0 ..= 2^w - 1`
//!
//! Float bounds are representation constants and are not derived from the
//! integer formula.
//!
//! The named constants below expose the same values as native integers for
//! callers doing their own range checks.

use crate::bigmath;
use crate::error::{Error, Magnitude, Result};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt::{Display, Formatter};

pub const MIN_INT_8: i8 = i8::MIN;
pub const MIN_INT_16: i16 = i16::MIN;
pub const MIN_INT_32: i32 = i32::MIN;
pub const MIN_INT_64: i64 = i64::MIN;
pub const MIN_INT_128: i128 = i128::MIN;

pub const MAX_INT_8: i8 = i8::MAX;
pub const MAX_INT_16: i16 = i16::MAX;
pub const MAX_INT_32: i32 = i32::MAX;
pub const MAX_INT_64: i64 = i64::MAX;
pub const MAX_INT_128: i128 = i128::MAX;

/// Lower bound shared by every unsigned width.
pub const MIN_UINT: u8 = 0;

pub const MAX_UINT_8: u8 = u8::MAX;
pub const MAX_UINT_16: u16 = u16::MAX;
pub const MAX_UINT_32: u32 = u32::MAX;
pub const MAX_UINT_64: u64 = u64::MAX;
pub const MAX_UINT_128: u128 = u128::MAX;

/// IEEE-754 single precision range, rounded as ±3.4×10³⁸.
pub const MIN_FLOAT_32: f64 = -3.4e38;
pub const MAX_FLOAT_32: f64 = 3.4e38;

pub const MIN_FLOAT_64: f64 = f64::MIN;
pub const MAX_FLOAT_64: f64 = f64::MAX;

/// Largest integer `n` such that `n` and `n + 1` are both exact in an `f64`
/// (2⁵³ − 1). Integral floats beyond it are accepted as floats.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Bit width of a fixed-width integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    W128,
}

impl Width {
    /// All widths, narrowest first.
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::W128];

    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W128 => 128,
        }
    }

    /// This width and every wider one, narrowest first.
    pub fn ladder(self) -> impl Iterator<Item = Width> {
        Width::ALL.into_iter().filter(move |w| *w >= self)
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            128 => Ok(Width::W128),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Width and signedness of an integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntKind {
    pub width: Width,
    pub signed: bool,
}

impl IntKind {
    pub const fn signed(width: Width) -> Self {
        Self {
            width,
            signed: true,
        }
    }

    pub const fn unsigned(width: Width) -> Self {
        Self {
            width,
            signed: false,
        }
    }

    /// Smallest representable value.
    pub fn min(&self) -> BigInt {
        if self.signed {
            -(BigInt::one() << (self.width.bits() - 1))
        } else {
            BigInt::zero()
        }
    }

    /// Largest representable value.
    pub fn max(&self) -> BigInt {
        let magnitude = if self.signed {
            self.width.bits() - 1
        } else {
            self.width.bits()
        };

        (BigInt::one() << magnitude) - 1
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    pub fn contains(&self, value: &BigInt) -> bool {
        *value >= self.min() && *value <= self.max()
    }

    /// Type name, e.g. `Int8` or `Uint128`.
    pub const fn name(&self) -> &'static str {
        match (self.signed, self.width) {
            (true, Width::W8) => "Int8",
            (true, Width::W16) => "Int16",
            (true, Width::W32) => "Int32",
            (true, Width::W64) => "Int64",
            (true, Width::W128) => "Int128",
            (false, Width::W8) => "Uint8",
            (false, Width::W16) => "Uint16",
            (false, Width::W32) => "Uint32",
            (false, Width::W64) => "Uint64",
            (false, Width::W128) => "Uint128",
        }
    }

    /// Checks `value` against this kind, producing the range error a
    /// constructor would raise.
    pub(crate) fn check(&self, value: BigInt) -> Result<BigInt> {
        let (min, max) = (self.min(), self.max());

        if value < min {
            tracing::debug!(ty = self.name(), %value, "value below minimum");

            return Err(Error::BelowMinimum {
                ty: self.name(),
                value: value.into(),
                min: min.into(),
            });
        }

        if value > max {
            tracing::debug!(ty = self.name(), %value, "value above maximum");

            return Err(Error::AboveMaximum {
                ty: self.name(),
                value: value.into(),
                max: max.into(),
            });
        }

        Ok(value)
    }

    /// Computes `base^exp` and checks it against this kind.
    ///
    /// When `|base| >= 2` and `exp` is at least the bit width, the power has
    /// magnitude `>= 2^bits` and cannot fit any kind of that width, so the
    /// range error is returned without computing it. The violated side
    /// follows the sign of the power: negative only for a negative base with
    /// an odd exponent.
    pub(crate) fn check_pow(&self, base: &BigInt, exp: u32) -> Result<BigInt> {
        if bigmath::abs(base) > BigInt::one() && exp >= self.width.bits() {
            let value = Magnitude::Power {
                base: base.clone(),
                exp,
            };

            tracing::debug!(ty = self.name(), %value, "power out of range");

            return Err(if base.is_negative() && exp % 2 == 1 {
                Error::BelowMinimum {
                    ty: self.name(),
                    value,
                    min: self.min().into(),
                }
            } else {
                Error::AboveMaximum {
                    ty: self.name(),
                    value,
                    max: self.max().into(),
                }
            });
        }

        self.check(bigmath::pow(base, exp))
    }
}

impl Display for IntKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Width of a bounded float.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    W32,
    W64,
}

impl FloatWidth {
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::W32 => 32,
            FloatWidth::W64 => 64,
        }
    }

    pub const fn min(self) -> f64 {
        match self {
            FloatWidth::W32 => MIN_FLOAT_32,
            FloatWidth::W64 => MIN_FLOAT_64,
        }
    }

    pub const fn max(self) -> f64 {
        match self {
            FloatWidth::W32 => MAX_FLOAT_32,
            FloatWidth::W64 => MAX_FLOAT_64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FloatWidth::W32 => "Float32",
            FloatWidth::W64 => "Float64",
        }
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl TryFrom<u32> for FloatWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            32 => Ok(FloatWidth::W32),
            64 => Ok(FloatWidth::W64),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

/// Returns `(min, max)` for a width and signedness.
pub fn bounds(width: Width, signed: bool) -> (BigInt, BigInt) {
    let kind = IntKind { width, signed };

    (kind.min(), kind.max())
}
