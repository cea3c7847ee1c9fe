use boundnum::bounds::{IntKind, Width};
use boundnum::composite::combine;
use boundnum::{Composer, Composite, CompositeCache, CompositeConfig, Error, ShiftPolicy};

use num_bigint::BigInt;
use std::sync::Arc;
use std::thread;

fn two_pow(bits: u32) -> BigInt {
    BigInt::from(1) << bits
}

#[test]
fn shift_by_target_width() {
    let composer = Composer::default();
    let composite = composer.compose_to(1, 0, Width::W64).unwrap();

    assert_eq!(composite.value(), &two_pow(64));
    assert_eq!(composite.kind(), Some(IntKind::signed(Width::W128)));
    assert!(!composite.exceeds_fixed_width());
}

#[test]
fn value_that_fits_stays_at_target() {
    let composer = Composer::default();
    let composite = composer.compose(0, 5).unwrap();

    assert_eq!(composite.value(), &BigInt::from(5));
    assert_eq!(composite.kind(), Some(IntKind::signed(Width::W64)));
}

#[test]
fn promotes_to_narrowest_wider_container() {
    let composer = Composer::default();
    let composite = composer
        .compose_as("#ff", "0x01", IntKind::signed(Width::W8))
        .unwrap();

    assert_eq!(composite.value(), &BigInt::from(65281));
    assert_eq!(composite.kind(), Some(IntKind::signed(Width::W32)));
}

#[test]
fn overflow_falls_back_to_biggest() {
    let composer = Composer::default();

    let positive = composer.compose_to(1, 0, Width::W128).unwrap();
    assert!(positive.is_biggest());
    assert!(positive.exceeds_fixed_width());
    assert_eq!(positive.kind(), None);
    assert_eq!(positive.value(), &two_pow(128));

    let negative = composer.compose_to(-1, 0, Width::W128).unwrap();
    assert!(negative.is_biggest());
    assert_eq!(negative.into_inner(), -two_pow(128));
}

#[test]
fn unsigned_promotion() {
    let composer = Composer::default();

    let wide = composer
        .compose_as(1, 0, IntKind::unsigned(Width::W64))
        .unwrap();
    assert_eq!(wide.kind(), Some(IntKind::unsigned(Width::W128)));

    assert!(matches!(
        composer.compose_as(-1, 0, IntKind::unsigned(Width::W64)),
        Err(Error::BelowMinimum { ty: "Uint64", .. })
    ));
}

#[test]
fn half_width_policy() {
    let composer = Composer::new(CompositeConfig {
        shift: ShiftPolicy::HalfWidth,
        ..CompositeConfig::default()
    });
    let composite = composer.compose_to(1, 0, Width::W64).unwrap();

    assert_eq!(composite.value(), &two_pow(32));
    assert_eq!(composite.kind(), Some(IntKind::signed(Width::W64)));
}

#[test]
fn combine_helper() {
    let high = BigInt::from(3);
    let low = BigInt::from(4);

    assert_eq!(
        combine(&high, &low, Width::W8, ShiftPolicy::TargetWidth),
        BigInt::from(3 * 256 + 4)
    );
    assert_eq!(
        combine(&high, &low, Width::W8, ShiftPolicy::HalfWidth),
        BigInt::from(3 * 16 + 4)
    );
}

#[test]
fn invalid_words() {
    let composer = Composer::default();

    assert!(matches!(composer.compose("zz", 1), Err(Error::NotANumber(_))));
    assert!(matches!(composer.compose("#zz", 1), Err(Error::NotANumber(_))));
    assert!(matches!(
        composer.compose(1.5, 1),
        Err(Error::ReceivedFloat { .. })
    ));
    assert!(composer.cache().is_empty());
}

#[test]
fn repeated_requests_hit_cache() {
    let composer = Composer::default();

    let first = composer.compose(7, 9).unwrap();
    let second = composer.compose("7", "#9").unwrap();

    assert_eq!(first, second);
    assert_eq!(composer.cache().len(), 1);
}

#[test]
fn signedness_is_part_of_cache_key() {
    let composer = Composer::default();

    let signed = composer
        .compose_as(1, 0, IntKind::signed(Width::W8))
        .unwrap();
    let unsigned = composer
        .compose_as(1, 0, IntKind::unsigned(Width::W8))
        .unwrap();

    assert_eq!(signed.kind(), Some(IntKind::signed(Width::W16)));
    assert_eq!(unsigned.kind(), Some(IntKind::unsigned(Width::W16)));
    assert_eq!(composer.cache().len(), 2);
}

#[test]
fn full_cache_keeps_composing() {
    let composer = Composer::new(CompositeConfig {
        cache_capacity: Some(1),
        ..CompositeConfig::default()
    });

    composer.compose(0, 1).unwrap();
    let second = composer.compose(0, 2).unwrap();

    assert_eq!(second.value(), &BigInt::from(2));
    assert_eq!(composer.cache().len(), 1);
    assert_eq!(composer.cache().capacity(), Some(1));

    composer.cache().clear();
    assert!(composer.cache().is_empty());
}

#[test]
fn huge_cache_capacity_is_only_a_limit() {
    let composer = Composer::new(CompositeConfig {
        cache_capacity: Some(usize::MAX),
        ..CompositeConfig::default()
    });

    let composite = composer.compose(0, 42).unwrap();

    assert_eq!(composite.value(), &BigInt::from(42));
    assert_eq!(composer.cache().capacity(), Some(usize::MAX));
    assert_eq!(composer.cache().len(), 1);
}

#[test]
fn cache_shared_between_threads() {
    let cache = Arc::new(CompositeCache::unbounded());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);

            thread::spawn(move || {
                let composer = Composer::with_cache(CompositeConfig::default(), cache);

                composer.compose_to(u64::MAX, u64::MAX, Width::W64).unwrap()
            })
        })
        .collect();

    let results: Vec<Composite> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected = (BigInt::from(u64::MAX) << 64) + BigInt::from(u64::MAX);

    assert!(results.iter().all(|r| r.value() == &expected));
    assert!(results.iter().all(Composite::is_biggest));
    assert_eq!(cache.len(), 1);
}
