//! Benchmarks for the formatting hot path.

use criterion::{criterion_group, criterion_main, Criterion};
use pricefmt::prelude::*;
use rust_decimal_macros::dec;
use std::hint::black_box;

fn bench_format(c: &mut Criterion) {
    let formatter = PriceFormatter::default();
    let none = FormatOptions::new();

    let mut group = c.benchmark_group("format");

    group.bench_function("configured_country", |b| {
        b.iter(|| {
            formatter
                .format(black_box(dec!(1234567.89)), Some("US"), Some("en"), &none)
                .unwrap()
        })
    });

    group.bench_function("eastern_arabic", |b| {
        b.iter(|| {
            formatter
                .format(black_box(dec!(1234567.89)), Some("EG"), Some("ar"), &none)
                .unwrap()
        })
    });

    group.bench_function("catalog_fallback", |b| {
        b.iter(|| {
            formatter
                .format(black_box(dec!(1234567.89)), Some("JP"), Some("en"), &none)
                .unwrap()
        })
    });

    group.bench_function("compact", |b| {
        b.iter(|| {
            formatter
                .format_compact(black_box(dec!(1500000)), Some("US"), Some("en"), &none)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
