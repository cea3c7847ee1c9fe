use boundnum::bounds::{
    self, FloatWidth, IntKind, MAX_FLOAT_32, MAX_FLOAT_64, MAX_INT_8, MAX_INT_128, MAX_SAFE_INTEGER,
    MAX_UINT_8, MAX_UINT_128, MIN_FLOAT_32, MIN_FLOAT_64, MIN_INT_8, MIN_INT_128, MIN_UINT, Width,
};
use boundnum::{
    Error, Int8, Int16, Int32, Int64, Int128, Uint8, Uint16, Uint32, Uint64, Uint128,
};

use num_bigint::BigInt;

#[test]
fn registry_matches_formula() {
    assert_eq!(
        bounds::bounds(Width::W8, true),
        (BigInt::from(-128), BigInt::from(127))
    );
    assert_eq!(
        bounds::bounds(Width::W8, false),
        (BigInt::from(0), BigInt::from(255))
    );
    assert_eq!(
        bounds::bounds(Width::W128, false),
        (BigInt::from(0), BigInt::from(u128::MAX))
    );
    assert_eq!(
        bounds::bounds(Width::W128, true),
        (BigInt::from(i128::MIN), BigInt::from(i128::MAX))
    );
}

#[test]
fn named_constants() {
    assert_eq!(MIN_INT_8, -128);
    assert_eq!(MAX_INT_8, 127);
    assert_eq!(MIN_INT_128, i128::MIN);
    assert_eq!(MAX_INT_128, i128::MAX);
    assert_eq!(MIN_UINT, 0);
    assert_eq!(MAX_UINT_8, 255);
    assert_eq!(MAX_UINT_128, u128::MAX);
    assert_eq!(MIN_FLOAT_32, -3.4e38);
    assert_eq!(MAX_FLOAT_32, 3.4e38);
    assert_eq!(MIN_FLOAT_64, f64::MIN);
    assert_eq!(MAX_FLOAT_64, f64::MAX);
    assert_eq!(MAX_SAFE_INTEGER, 9_007_199_254_740_991.0);
}

#[test]
fn width_from_bits() {
    assert_eq!(Width::try_from(64u32).unwrap(), Width::W64);
    assert_eq!(Width::try_from(24u32), Err(Error::UnsupportedWidth(24)));
    assert_eq!(FloatWidth::try_from(32u32).unwrap(), FloatWidth::W32);
    assert_eq!(FloatWidth::try_from(16u32), Err(Error::UnsupportedWidth(16)));
}

#[test]
fn ladder_starts_at_width() {
    let ladder: Vec<_> = Width::W32.ladder().collect();
    assert_eq!(ladder, vec![Width::W32, Width::W64, Width::W128]);

    assert_eq!(Width::W128.ladder().count(), 1);
}

#[test]
fn kind_names() {
    assert_eq!(IntKind::signed(Width::W16).name(), "Int16");
    assert_eq!(IntKind::unsigned(Width::W128).to_string(), "Uint128");
    assert_eq!(FloatWidth::W64.name(), "Float64");
}

macro_rules! boundaries {
    ($($name:ident: $ty:ty => $native:ty),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let min = BigInt::from(<$native>::MIN);
                let max = BigInt::from(<$native>::MAX);

                assert_eq!(<$ty>::minimum(), min);
                assert_eq!(<$ty>::maximum(), max);

                assert_eq!(<$ty>::new(min.clone()).unwrap().value(), &min);
                assert_eq!(<$ty>::new(max.clone()).unwrap().value(), &max);

                assert!(matches!(
                    <$ty>::new(&min - BigInt::from(1)),
                    Err(Error::BelowMinimum { .. })
                ));
                assert!(matches!(
                    <$ty>::new(&max + BigInt::from(1)),
                    Err(Error::AboveMaximum { .. })
                ));
            }
        )*
    };
}

boundaries! {
    int8_boundaries: Int8 => i8,
    int16_boundaries: Int16 => i16,
    int32_boundaries: Int32 => i32,
    int64_boundaries: Int64 => i64,
    int128_boundaries: Int128 => i128,
    uint8_boundaries: Uint8 => u8,
    uint16_boundaries: Uint16 => u16,
    uint32_boundaries: Uint32 => u32,
    uint64_boundaries: Uint64 => u64,
    uint128_boundaries: Uint128 => u128,
}

#[test]
fn range_error_carries_value_and_bound() {
    let err = Int8::new(200).unwrap_err();

    assert_eq!(
        err,
        Error::AboveMaximum {
            ty: "Int8",
            value: BigInt::from(200).into(),
            max: BigInt::from(127).into(),
        }
    );
    assert!(err.is_range());
    assert_eq!(
        err.to_string(),
        "The expected maximum value of Int8 was 127 but it was received 200"
    );
}
