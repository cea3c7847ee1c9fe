//! Tagged numeric input
//!
//! Every constructor and arithmetic operation in this crate accepts
//! `impl Into<Source>`. The input kind is resolved once, at this boundary,
//! so the bounded types only ever see a `BigInt` or an `f64`.
//!
//! Accepted inputs:
//! - text: a decimal numeral, optionally signed and padded with whitespace
//!   (`"42"`, `" -7 "`, `"3.75"`, `"1e3"`)
//! - native integers of every width, and `BigInt`
//! - native floats
//! - any bounded value of this crate, which lowers to its stored value
//!
//! Text used as a composite word may also be hexadecimal, marked with a
//! `#` or `0x` prefix.

use crate::bounds::MAX_SAFE_INTEGER;
use crate::error::{Error, Result};

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num, Signed, ToPrimitive};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A numeric input before it has been checked against any type.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Text(String),
    Integer(BigInt),
    Float(f64),
}

/// A source resolved to either an exact integer or a finite float.
pub(crate) enum Numeric {
    Whole(BigInt),
    Real(f64),
}

impl Source {
    /// Resolves to an exact integer.
    ///
    /// `ty` names the requesting type for the `ReceivedFloat` diagnostic.
    pub(crate) fn into_integer(self, ty: &'static str) -> Result<BigInt> {
        match self {
            Source::Integer(value) => Ok(value),
            Source::Float(value) => {
                if !value.is_finite() {
                    return Err(Error::NotANumber(value.to_string()));
                }

                if value.fract() != 0.0 {
                    return Err(Error::ReceivedFloat { ty, value });
                }

                whole_float(value)
            }
            Source::Text(text) => match parse_text(&text)? {
                Numeric::Whole(value) => Ok(value),
                Numeric::Real(value) if value.fract() == 0.0 => whole_float(value),
                Numeric::Real(_) => Err(Error::NotAnInteger(text)),
            },
        }
    }

    /// Resolves to a finite number, keeping exact integers exact.
    pub(crate) fn into_numeric(self) -> Result<Numeric> {
        match self {
            Source::Integer(value) => Ok(Numeric::Whole(value)),
            Source::Float(value) if value.is_finite() => Ok(Numeric::Real(value)),
            Source::Float(value) => Err(Error::NotANumber(value.to_string())),
            Source::Text(text) => parse_text(&text),
        }
    }

    /// Resolves to an `f64`, accepting integral inputs.
    pub(crate) fn into_f64(self) -> Result<f64> {
        match self.into_numeric()? {
            Numeric::Real(value) => Ok(value),
            Numeric::Whole(value) => value
                .to_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::NotANumber(value.to_string())),
        }
    }

    /// Resolves one half of a composite pair. Text marked with `#` or `0x`
    /// is read as hexadecimal.
    pub(crate) fn into_word(self) -> Result<BigInt> {
        if let Source::Text(text) = &self {
            let trimmed = text.trim();
            let (negative, body) = match trimmed.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, trimmed),
            };

            let hex = body
                .strip_prefix('#')
                .or_else(|| body.strip_prefix("0x"))
                .or_else(|| body.strip_prefix("0X"));

            if let Some(digits) = hex {
                let value = BigInt::from_str_radix(digits, 16)
                    .map_err(|_| Error::NotANumber(text.clone()))?;

                return Ok(if negative { -value } else { value });
            }
        }

        self.into_integer("word")
    }

    /// Returns `true` if the source is a whole number of any magnitude.
    pub(crate) fn is_whole(&self) -> bool {
        self.clone().into_integer("Integer").is_ok()
    }
}

fn parse_text(text: &str) -> Result<Numeric> {
    let trimmed = text.trim();

    if let Ok(value) = BigInt::from_str(trimmed) {
        return Ok(Numeric::Whole(value));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Numeric::Real(value)),
        _ => Err(Error::NotANumber(text.to_string())),
    }
}

fn whole_float(value: f64) -> Result<BigInt> {
    BigInt::from_f64(value).ok_or_else(|| Error::NotANumber(value.to_string()))
}

/// Returns `true` for integral floats small enough to be exact integers.
pub(crate) fn is_safe_integral(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER
}

/// Returns `true` if `value` lies beyond the exact-integer range of `f64`.
pub(crate) fn beyond_safe(value: &BigInt) -> bool {
    value.abs().to_f64().is_none_or(|v| v > MAX_SAFE_INTEGER)
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Text(v) => f.write_str(v),
            Source::Integer(v) => write!(f, "{}", v),
            Source::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! from_native_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Source {
                fn from(value: $t) -> Self {
                    Source::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

from_native_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Source {
    fn from(value: f64) -> Self {
        Source::Float(value)
    }
}

impl From<f32> for Source {
    fn from(value: f32) -> Self {
        Source::Float(value as f64)
    }
}

impl From<BigInt> for Source {
    fn from(value: BigInt) -> Self {
        Source::Integer(value)
    }
}

impl From<&BigInt> for Source {
    fn from(value: &BigInt) -> Self {
        Source::Integer(value.clone())
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Source::Text(value.to_string())
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Source::Text(value)
    }
}
