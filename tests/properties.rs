use boundnum::bounds::{IntKind, Width};
use boundnum::{
    Composer, CompositeConfig, Float32, Float64, Int8, Int16, Int32, Int64, Int128, ShiftPolicy,
    Uint8, Uint16, Uint32, Uint64, Uint128,
};

use num_bigint::BigInt;
use quickcheck_macros::quickcheck;

macro_rules! round_trips {
    ($($name:ident: $ty:ty => $native:ty),* $(,)?) => {
        $(
            #[quickcheck]
            fn $name(v: $native) -> bool {
                <$ty>::new(v).map(<$native>::from) == Ok(v)
            }
        )*
    };
}

round_trips! {
    int8_round_trip: Int8 => i8,
    int16_round_trip: Int16 => i16,
    int32_round_trip: Int32 => i32,
    int64_round_trip: Int64 => i64,
    int128_round_trip: Int128 => i128,
    uint8_round_trip: Uint8 => u8,
    uint16_round_trip: Uint16 => u16,
    uint32_round_trip: Uint32 => u32,
    uint64_round_trip: Uint64 => u64,
    uint128_round_trip: Uint128 => u128,
}

macro_rules! agrees {
    ($v:expr; $($ty:ty),*) => {
        true $(&& <$ty>::is_valid($v.clone()) == <$ty>::new($v.clone()).is_ok())*
    };
}

#[quickcheck]
fn predicates_agree_on_integers(v: i128) -> bool {
    agrees!(v; Int8, Int16, Int32, Int64, Int128, Uint8, Uint16, Uint32, Uint64, Uint128, Float32, Float64)
}

#[quickcheck]
fn predicates_agree_on_floats(v: f64) -> bool {
    agrees!(v; Int8, Int16, Int32, Int64, Int128, Uint8, Uint16, Uint32, Uint64, Uint128, Float32, Float64)
}

#[quickcheck]
fn predicates_agree_on_text(v: String) -> bool {
    agrees!(v; Int8, Int16, Int32, Int64, Int128, Uint8, Uint16, Uint32, Uint64, Uint128, Float32, Float64)
}

#[quickcheck]
fn range_matches_native_type(v: i128) -> bool {
    Int8::is_valid(v) == i8::try_from(v).is_ok()
        && Int64::is_valid(v) == i64::try_from(v).is_ok()
        && Uint16::is_valid(v) == u16::try_from(v).is_ok()
        && Uint128::is_valid(v) == u128::try_from(v).is_ok()
}

#[quickcheck]
fn add_matches_checked_add(a: u8, b: u8) -> bool {
    let sum = Uint8::new(a).and_then(|x| x.add(b)).ok().map(u8::from);

    sum == a.checked_add(b)
}

#[quickcheck]
fn subtract_matches_checked_sub(a: i16, b: i16) -> bool {
    let diff = Int16::new(a).and_then(|x| x.subtract(b)).ok().map(i16::from);

    diff == a.checked_sub(b)
}

#[quickcheck]
fn multiply_matches_checked_mul(a: i32, b: i32) -> bool {
    let product = Int32::new(a).and_then(|x| x.multiply(b)).ok().map(i32::from);

    product == a.checked_mul(b)
}

#[quickcheck]
fn divide_matches_checked_div(a: i8, b: i8) -> bool {
    let quotient = Int8::new(a).and_then(|x| x.divide(b)).ok().map(i8::from);
    let remainder = Int8::new(a).and_then(|x| x.remainder(b)).ok().map(i8::from);

    // -128 % -1 is 0 and in range, unlike -128 / -1
    let expected = (b != 0).then(|| a.wrapping_rem(b));

    quotient == a.checked_div(b) && remainder == expected
}

#[quickcheck]
fn half_width_packs_words(high: u32, low: u32) -> bool {
    let composer = Composer::new(CompositeConfig {
        shift: ShiftPolicy::HalfWidth,
        ..CompositeConfig::default()
    });
    let packed = ((high as u64) << 32) | low as u64;

    composer
        .compose_as(high, low, IntKind::unsigned(Width::W64))
        .is_ok_and(|c| c.value() == &BigInt::from(packed))
}
