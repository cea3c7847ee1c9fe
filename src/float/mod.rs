//! Bounded floats
//!
//! `Float32` and `Float64` (alias `Double`) wrap an `f64` that stays finite
//! and within the magnitude bounds of its width. Truncation and rounding
//! produce a generic [`crate::int::Integer`]; narrow it explicitly when a
//! specific width is needed.
//!
//! [`Float`] and the [`from`] dispatcher cover widths chosen at runtime.

mod core;
mod dynamic;
mod ops;

pub use self::core::{BoundedFloat, Double, F32, F64, FixedFloat, Float32, Float64, is_float};
pub use dynamic::{Float, from};
