use boundnum::bigmath;
use boundnum::bounds::Width;
use boundnum::{Biggest, Error};

use num_bigint::BigInt;

#[test]
fn from_words_defaults_to_128_bit_shift() {
    let v = Biggest::from_words(1, 0, None).unwrap();

    assert_eq!(v.value(), &(BigInt::from(1) << 128));
    assert!(v.is_really_biggest());

    let narrow = Biggest::from_words(1, 2, Some(Width::W32)).unwrap();
    assert_eq!(narrow.value(), &BigInt::from((1u64 << 32) + 2));
    assert!(!narrow.exceeds_fixed_width());
}

#[test]
fn classification() {
    assert!(Biggest::is_biggest("340282366920938463463374607431768211456"));
    assert!(!Biggest::is_biggest(i128::MAX));
    assert!(!Biggest::is_biggest(1.5));

    assert!(Biggest::is_bigger(i128::MAX));
    assert!(!Biggest::is_bigger(u128::MAX));
}

#[test]
fn unbounded_arithmetic() {
    let a = Biggest::new(u128::MAX).unwrap();
    let square = a.multiply(u128::MAX).unwrap();

    assert_eq!(
        square.value(),
        &(BigInt::from(u128::MAX) * BigInt::from(u128::MAX))
    );
    assert_eq!(a.pow(2), square);
    assert_eq!(square.divide(u128::MAX).unwrap(), a);
    assert_eq!(a.value(), &BigInt::from(u128::MAX));
}

#[test]
fn divide_by_zero() {
    let a = Biggest::new(10).unwrap();

    assert_eq!(a.divide(0), Err(Error::DivisionByZero));
    assert_eq!(a.remainder(0), Err(Error::DivisionByZero));
}

#[test]
fn abs_and_sign() {
    let a = Biggest::new(-42).unwrap();

    assert_eq!(a.abs().value(), &BigInt::from(42));
    assert_eq!(a.sign().value(), &BigInt::from(-1));
}

#[test]
fn bigmath_helpers() {
    let values = [BigInt::from(3), BigInt::from(-7), BigInt::from(5)];

    assert_eq!(bigmath::pow(&BigInt::from(2), 10), BigInt::from(1024));
    assert_eq!(bigmath::abs(&BigInt::from(-5)), BigInt::from(5));
    assert_eq!(bigmath::sign(&BigInt::from(-9)), BigInt::from(-1));
    assert_eq!(bigmath::sign(&BigInt::from(0)), BigInt::from(0));
    assert_eq!(bigmath::min(&values), Some(BigInt::from(-7)));
    assert_eq!(bigmath::max(&values), Some(BigInt::from(5)));
    assert_eq!(bigmath::min(&[]), None);
}

#[test]
fn exceeds_on_both_sides_of_signed_128() {
    let below = Biggest::new(i128::MIN).unwrap().subtract(1).unwrap();
    let above = Biggest::new(i128::MAX).unwrap().add(1).unwrap();

    assert!(below.exceeds_fixed_width());
    assert!(below.is_really_biggest());
    assert!(above.is_really_biggest());
    assert!(!Biggest::new(i128::MIN).unwrap().is_really_biggest());
}
