//! Fixed-width bounded integer
//!
//! `BoundedInt<K>` stores its value as a `BigInt` and carries its width and
//! signedness in the marker type `K`. Every live instance satisfies
//! `K::KIND.min() <= value <= K::KIND.max()`: the constructors reject
//! anything else, and every operation that produces a new value checks it
//! again before returning.

use crate::bounds::{IntKind, MAX_INT_128, MIN_INT_128, Width};
use crate::composite::{ShiftPolicy, combine};
use crate::error::Result;
use crate::source::Source;

use num_bigint::BigInt;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Marker for a concrete integer width and signedness.
///
/// Implemented only by the marker types of this module.
pub trait FixedWidth:
    sealed::Sealed + Copy + Debug + Default + Eq + Ord + Hash + Send + Sync + 'static
{
    const KIND: IntKind;
}

macro_rules! markers {
    ($($marker:ident => $kind:expr),* $(,)?) => {
        $(
            #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $marker;

            impl sealed::Sealed for $marker {}

            impl FixedWidth for $marker {
                const KIND: IntKind = $kind;
            }
        )*
    };
}

markers! {
    I8 => IntKind::signed(Width::W8),
    I16 => IntKind::signed(Width::W16),
    I32 => IntKind::signed(Width::W32),
    I64 => IntKind::signed(Width::W64),
    I128 => IntKind::signed(Width::W128),
    U8 => IntKind::unsigned(Width::W8),
    U16 => IntKind::unsigned(Width::W16),
    U32 => IntKind::unsigned(Width::W32),
    U64 => IntKind::unsigned(Width::W64),
    U128 => IntKind::unsigned(Width::W128),
}

/// Integer constrained to the range of `K`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedInt<K: FixedWidth> {
    pub(crate) value: BigInt,
    width: PhantomData<K>,
}

pub type Int8 = BoundedInt<I8>;
pub type Int16 = BoundedInt<I16>;
pub type Int32 = BoundedInt<I32>;
pub type Int64 = BoundedInt<I64>;
pub type Int128 = BoundedInt<I128>;

pub type Uint8 = BoundedInt<U8>;
pub type Uint16 = BoundedInt<U16>;
pub type Uint32 = BoundedInt<U32>;
pub type Uint64 = BoundedInt<U64>;
pub type Uint128 = BoundedInt<U128>;

pub type LongLong = Int64;
pub type Bigger = Int128;

impl<K: FixedWidth> BoundedInt<K> {
    /// Builds a value from text, a native integer, a `BigInt` or another
    /// bounded integer.
    ///
    /// # Errors
    /// - `NotANumber` / `NotAnInteger` if the input is not a whole number
    /// - `ReceivedFloat` if the input is a fractional native float
    /// - `BelowMinimum` / `AboveMaximum` if it lies outside this type's range
    pub fn new(source: impl Into<Source>) -> Result<Self> {
        Self::validate(source.into()).map(Self::from_checked)
    }

    /// Returns `true` exactly when [`BoundedInt::new`] would succeed.
    pub fn is_valid(source: impl Into<Source>) -> bool {
        Self::validate(source.into()).is_ok()
    }

    /// Builds a value from a `(high, low)` word pair as
    /// `(high << K::BITS) + low`.
    ///
    /// The result must fit this exact type; no promotion happens here. Use
    /// [`crate::composite::Composer`] to let the container grow.
    pub fn from_words(high: impl Into<Source>, low: impl Into<Source>) -> Result<Self> {
        let high = high.into().into_word()?;
        let low = low.into().into_word()?;

        let value = combine(&high, &low, K::KIND.width, ShiftPolicy::TargetWidth);

        K::KIND.check(value).map(Self::from_checked)
    }

    fn validate(source: Source) -> Result<BigInt> {
        let value = source.into_integer(K::KIND.name())?;

        K::KIND.check(value)
    }

    pub(crate) fn from_checked(value: BigInt) -> Self {
        Self {
            value,
            width: PhantomData,
        }
    }

    /// Returns the exact value.
    ///
    /// # Returns
    /// A reference to the stored `BigInt`, always within
    /// `[Self::minimum(), Self::maximum()]`.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Consumes the bounded integer and returns the exact value.
    pub fn into_inner(self) -> BigInt {
        self.value
    }

    /// Returns the width and signedness of this type.
    pub const fn kind() -> IntKind {
        K::KIND
    }

    /// Smallest value of this type: `-2^(w-1)` when signed, `0` otherwise.
    pub fn minimum() -> BigInt {
        K::KIND.min()
    }

    /// Largest value of this type: `2^(w-1) - 1` when signed, `2^w - 1`
    /// otherwise.
    pub fn maximum() -> BigInt {
        K::KIND.max()
    }

    /// Returns `true` if the value lies outside the signed 128-bit range,
    /// the widest fixed container. Only `Uint128` can report `true`.
    ///
    /// Both sides of the range are tested, matching
    /// [`crate::Biggest::exceeds_fixed_width`].
    pub fn exceeds_fixed_width(&self) -> bool {
        exceeds_fixed_width(&self.value)
    }
}

pub(crate) fn exceeds_fixed_width(value: &BigInt) -> bool {
    *value > BigInt::from(MAX_INT_128) || *value < BigInt::from(MIN_INT_128)
}
