//! Named classifiers
//!
//! One pure predicate per concrete type, each returning `true` exactly
//! when the matching constructor accepts the input.

use crate::float::{Float32, Float64};
use crate::int::{
    Int8, Int16, Int32, Int64, Int128, Long, Uint8, Uint16, Uint32, Uint64, Uint128,
};
use crate::source::Source;

macro_rules! predicates {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Returns `true` if `", stringify!($ty), "::new` accepts `source`.")]
            pub fn $name(source: impl Into<Source>) -> bool {
                <$ty>::is_valid(source)
            }
        )*
    };
}

predicates! {
    is_int8 => Int8,
    is_int16 => Int16,
    is_int32 => Int32,
    is_int64 => Int64,
    is_int128 => Int128,
    is_uint8 => Uint8,
    is_uint16 => Uint16,
    is_uint32 => Uint32,
    is_uint64 => Uint64,
    is_uint128 => Uint128,
    is_float32 => Float32,
    is_float64 => Float64,
    is_long => Long,
}

pub fn is_long_long(source: impl Into<Source>) -> bool {
    is_int64(source)
}

pub fn is_bigger(source: impl Into<Source>) -> bool {
    is_int128(source)
}

pub fn is_double(source: impl Into<Source>) -> bool {
    is_float64(source)
}

/// Returns `true` if any unsigned width accepts `source`.
pub fn is_uint(source: impl Into<Source>) -> bool {
    is_uint128(source)
}
