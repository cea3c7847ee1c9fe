//! Validation errors
//!
//! Every failure in this crate is raised at the point of construction or
//! arithmetic and returned to the caller unchanged. There is no retry and
//! no clamping: a bounded type exists to make overflow observable.
//!
//! Range failures carry the name of the rejecting type, the attempted value
//! and the bound that was violated.

use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// A numeric value attached to an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Magnitude {
    Integer(BigInt),
    Float(f64),

    /// `base^exp`, kept symbolic when the power is known to be out of range
    /// and too large to be worth computing.
    Power { base: BigInt, exp: u32 },
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Magnitude::Integer(v) => write!(f, "{}", v),
            Magnitude::Float(v) => write!(f, "{}", v),
            Magnitude::Power { base, exp } => write!(f, "{}^{}", base, exp),
        }
    }
}

impl From<BigInt> for Magnitude {
    fn from(value: BigInt) -> Self {
        Magnitude::Integer(value)
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Float(value)
    }
}

/// Errors raised by construction, conversion and arithmetic.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// The input cannot be read as a number at all.
    #[error("The value received is not a valid number: {0:?}")]
    NotANumber(String),

    /// The input is numeric but is not a whole number.
    #[error("The value received is not a valid integer: {0:?}")]
    NotAnInteger(String),

    /// A fractional float was handed to an integer type.
    #[error("{ty} expects an integer but received the float {value}")]
    ReceivedFloat { ty: &'static str, value: f64 },

    /// An integral value was handed to a float type.
    #[error("{ty} expects a float but received the integer {value}")]
    ReceivedInteger { ty: &'static str, value: Magnitude },

    #[error("The expected minimum value of {ty} was {min} but it was received {value}")]
    BelowMinimum {
        ty: &'static str,
        value: Magnitude,
        min: Magnitude,
    },

    #[error("The expected maximum value of {ty} was {max} but it was received {value}")]
    AboveMaximum {
        ty: &'static str,
        value: Magnitude,
        max: Magnitude,
    },

    #[error("Division by zero")]
    DivisionByZero,

    /// A bit width outside {8, 16, 32, 64, 128} (or {32, 64} for floats).
    #[error("Unsupported bit width: {0}")]
    UnsupportedWidth(u32),
}

impl Error {
    /// Returns `true` for `BelowMinimum` and `AboveMaximum`.
    pub fn is_range(&self) -> bool {
        matches!(self, Error::BelowMinimum { .. } | Error::AboveMaximum { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
