use boundnum::bounds::Width;
use boundnum::{Composer, CompositeConfig};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_composite(c: &mut Criterion) {
    let cached = Composer::default();

    c.bench_function("compose cached", |b| {
        b.iter(|| cached.compose_to(black_box(1), black_box(0), Width::W64))
    });

    c.bench_function("compose uncached", |b| {
        b.iter(|| {
            let composer = Composer::new(CompositeConfig {
                cache_capacity: Some(0),
                ..CompositeConfig::default()
            });

            composer.compose_to(black_box(u64::MAX), black_box(u64::MAX), Width::W64)
        })
    });
}

criterion_group!(benches, bench_composite);
criterion_main!(benches);
