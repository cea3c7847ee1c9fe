//! Conversions between bounded integers and native types
//!
//! - `TryFrom<native>` for every native integer width, failing exactly like
//!   [`BoundedInt::new`]
//! - `From<BoundedInt>` into the native integer of the same width and
//!   signedness, which cannot fail because the range invariant holds
//! - `FromStr` and `Display` through the decimal representation
//!
//! The native extraction goes through a big-endian two's complement byte
//! image, sign-extended to the native width.

use crate::error::{Error, Result};
use crate::int::core::{
    BoundedInt, FixedWidth, Int8, Int16, Int32, Int64, Int128, Uint8, Uint16, Uint32, Uint64,
    Uint128,
};
use crate::source::Source;

use num_bigint::{BigInt, Sign};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sign-extends the two's complement image of `value` into `N` bytes.
///
/// Only the low `N` bytes are kept, so the caller must know the value fits.
fn to_be_array<const N: usize>(value: &BigInt) -> [u8; N] {
    let bytes = value.to_signed_bytes_be();
    let fill = if value.sign() == Sign::Minus { 0xFF } else { 0x00 };

    let mut out = [fill; N];
    let take = bytes.len().min(N);
    out[N - take..].copy_from_slice(&bytes[bytes.len() - take..]);

    out
}

macro_rules! into_native {
    ($($bounded:ty => $native:ty),* $(,)?) => {
        $(
            impl From<$bounded> for $native {
                fn from(value: $bounded) -> Self {
                    <$native>::from_be_bytes(to_be_array(&value.value))
                }
            }

            impl From<&$bounded> for $native {
                fn from(value: &$bounded) -> Self {
                    <$native>::from_be_bytes(to_be_array(&value.value))
                }
            }
        )*
    };
}

into_native! {
    Int8 => i8,
    Int16 => i16,
    Int32 => i32,
    Int64 => i64,
    Int128 => i128,
    Uint8 => u8,
    Uint16 => u16,
    Uint32 => u32,
    Uint64 => u64,
    Uint128 => u128,
}

macro_rules! try_from_native {
    ($($native:ty),*) => {
        $(
            impl<K: FixedWidth> TryFrom<$native> for BoundedInt<K> {
                type Error = Error;

                fn try_from(value: $native) -> Result<Self> {
                    Self::new(value)
                }
            }
        )*
    };
}

try_from_native!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<K: FixedWidth> TryFrom<BigInt> for BoundedInt<K> {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self> {
        Self::new(value)
    }
}

impl<K: FixedWidth> FromStr for BoundedInt<K> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<K: FixedWidth> From<BoundedInt<K>> for Source {
    fn from(value: BoundedInt<K>) -> Self {
        Source::Integer(value.value)
    }
}

impl<K: FixedWidth> From<&BoundedInt<K>> for Source {
    fn from(value: &BoundedInt<K>) -> Self {
        Source::Integer(value.value.clone())
    }
}

impl<K: FixedWidth> From<BoundedInt<K>> for BigInt {
    fn from(value: BoundedInt<K>) -> Self {
        value.value
    }
}

impl<K: FixedWidth> Display for BoundedInt<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
