//! Bounded numeric types
//!
//! This crate provides fixed-width integers and floats whose range is
//! enforced on every construction and every arithmetic operation. A value
//! that would fall outside its type's range is never produced: the
//! operation returns an error instead of wrapping, saturating or rounding.
//!
//! All values are stored exactly (`BigInt` for integers, `f64` for
//! floats), so bounds are checked on the true mathematical result rather
//! than on a machine result that may already have wrapped.
//!
//! # Module overview
//!
//! - `bounds`
//!   The width registry: exact `[min, max]` for every width and
//!   signedness, float magnitude bounds, and the named `MIN_*` / `MAX_*`
//!   constants.
//!
//! - `int`
//!   `Int8` … `Int128` and `Uint8` … `Uint128`, all instances of one
//!   generic `BoundedInt`, plus the runtime-typed `Integer` returned by the
//!   width dispatcher and the auto-sized `Long`.
//!
//! - `float`
//!   `Float32` and `Float64` (`Double`), the runtime-width `Float` and its
//!   dispatcher, with fractional part, truncation and ceiling.
//!
//! - `composite`
//!   Builds integers from `(high, low)` word pairs and promotes the result
//!   to a wider container, or to `Biggest`, when the target cannot hold it.
//!
//! - `biggest`
//!   The overflow container: an integer with no upper bound that reports
//!   whether it exceeds every fixed width.
//!
//! - `bigmath`
//!   `pow`, `abs`, `sign`, `min` and `max` over `BigInt`.
//!
//! - `predicates`
//!   `is_int8`, `is_uint32`, `is_float64`, …: pure classifiers that agree
//!   with the matching constructors.
//!
//! # Semantics
//!
//! - Arithmetic never mutates: `a.add(b)` returns a new value and leaves
//!   `a` untouched, whether it succeeds or fails.
//! - Division truncates toward zero; a zero divisor is `DivisionByZero`.
//! - Inputs are anything convertible into [`Source`]: decimal text, native
//!   numbers, `BigInt`, or another bounded value.
//!
//! Rejections are logged at `debug` level through `tracing`; the crate does
//! not install a subscriber.

pub mod bigmath;
pub mod biggest;
pub mod bounds;
pub mod composite;
pub mod error;
pub mod float;
pub mod int;
pub mod predicates;
pub mod source;

pub use biggest::Biggest;
pub use bounds::{FloatWidth, IntKind, Width};
pub use composite::{Composer, Composite, CompositeCache, CompositeConfig, ShiftPolicy};
pub use error::{Error, Magnitude, Result};
pub use float::{Double, Float, Float32, Float64, is_float};
pub use int::{
    Bigger, Int8, Int16, Int32, Int64, Int128, Integer, Long, LongLong, Uint8, Uint16, Uint32,
    Uint64, Uint128, is_int,
};
pub use source::Source;
