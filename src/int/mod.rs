//! Bounded integers
//!
//! One type per width and signedness (`Int8` … `Int128`, `Uint8` …
//! `Uint128`), all instances of the generic [`BoundedInt`]. The width lives
//! in a zero-sized marker type, so a single implementation covers all ten
//! combinations.
//!
//! Next to the fixed types this module provides:
//! - [`Integer`], the runtime-typed result of the width dispatcher
//! - [`Long`], an integer that picks 32 or 64 bits by itself
//! - [`is_int`], a width-free whole-number check

mod conv;
mod core;
mod dynamic;
mod long;
mod ops;

pub use self::core::{
    Bigger, BoundedInt, FixedWidth, I8, I16, I32, I64, I128, Int8, Int16, Int32, Int64, Int128,
    LongLong, U8, U16, U32, U64, U128, Uint8, Uint16, Uint32, Uint64, Uint128,
};
pub use dynamic::{Integer, is_int};
pub use long::Long;

pub(crate) use self::core::exceeds_fixed_width;
pub(crate) use ops::{Op, apply};

use crate::bounds::{IntKind, Width};
use crate::error::Result;
use crate::source::Source;

/// Width dispatcher: builds an integer of the given width and signedness,
/// or a generic integer when `width` is `None`.
///
/// A generic unsigned integer has no upper bound but still rejects
/// negative values.
///
/// # Errors
/// The errors of the selected constructor: input errors, and
/// `BelowMinimum` / `AboveMaximum` outside the selected range.
pub fn from(source: impl Into<Source>, width: Option<Width>, signed: bool) -> Result<Integer> {
    match width {
        Some(width) => Integer::from_source(source, Some(IntKind { width, signed })),
        None => Integer::unbounded(source, signed),
    }
}
