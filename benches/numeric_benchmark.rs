// ============================================================================
// Numeric Toolkit Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Fixed Point - multiply/divide through 128-bit intermediates, parsing
// 2. Conversion - policy conversion across domains
// 3. Random - small-span fast path vs. wide rejection sampling
// 4. Generic - algorithms dispatched through the facade
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_toolkit::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Fixed Point Benchmarks
// ============================================================================

fn benchmark_fixed_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_point");

    let a: Fixed = "12345.678901".parse().unwrap();
    let b: Fixed = "-3.25".parse().unwrap();

    group.bench_function("checked_mul", |bench| {
        bench.iter(|| black_box(a).checked_mul(black_box(b)))
    });

    group.bench_function("checked_div", |bench| {
        bench.iter(|| black_box(a).checked_div(black_box(b)))
    });

    group.bench_function("round_to_even", |bench| {
        bench.iter(|| black_box(a).round(2, MidpointRounding::ToEven))
    });

    let european = NumberFormat::european();
    group.bench_function("parse_european", |bench| {
        bench.iter(|| Fixed::parse_with(black_box("1.234.567,891"), &european))
    });

    group.bench_function("display", |bench| bench.iter(|| black_box(a).to_string()));

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for mode in [ConversionMode::Default, ConversionMode::Clamp, ConversionMode::Cast] {
        group.bench_with_input(
            BenchmarkId::new("f64_to_i32", format!("{:?}", mode)),
            &mode,
            |bench, &mode| bench.iter(|| convert::<f64, i32>(black_box(1.5e9), mode)),
        );
    }

    group.bench_function("decimal_to_fixed", |bench| {
        let d = rust_decimal::Decimal::new(123_456_789, 4);
        bench.iter(|| convert::<_, Fixed>(black_box(d), ConversionMode::Default))
    });

    group.bench_function("saturating_generic_f64_to_u8", |bench| {
        bench.iter(|| convert_saturating_generic::<f64, u8>(black_box(-7.5)))
    });

    group.finish();
}

// ============================================================================
// Random Benchmarks
// Small spans use gen_range; wide spans go through rejection sampling
// ============================================================================

fn benchmark_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let mut rng = StdRng::seed_from_u64(0xBE7C);

    group.bench_function("i32_small_span", |bench| {
        bench.iter(|| {
            i32::provider().next_in_range(&mut rng, -1_000, 1_000, GenerationMode::Default)
        })
    });

    group.bench_function("u64_full_span", |bench| {
        bench.iter(|| {
            u64::provider().next_in_range(&mut rng, 0, u64::MAX, GenerationMode::Default)
        })
    });

    for mode in [GenerationMode::Default, GenerationMode::Extended] {
        group.bench_with_input(
            BenchmarkId::new("f64_unit_range", format!("{:?}", mode)),
            &mode,
            |bench, &mode| {
                bench.iter(|| f64::provider().next_in_range(&mut rng, -1.0, 1.0, mode))
            },
        );
    }

    group.finish();
}

// ============================================================================
// Generic Algorithm Benchmarks
// ============================================================================

fn benchmark_generic(c: &mut Criterion) {
    let mut group = c.benchmark_group("generic");

    for len in [100usize, 10_000].iter() {
        let ints: Vec<i64> = (0..*len as i64).collect();
        let fixed: Vec<Fixed> = ints.iter().map(|&i| Fixed::from_raw(i * 1_250)).collect();

        group.bench_with_input(BenchmarkId::new("sum_i64", len), &ints, |bench, values| {
            bench.iter(|| sum(black_box(values)))
        });

        group.bench_with_input(BenchmarkId::new("sum_fixed", len), &fixed, |bench, values| {
            bench.iter(|| sum(black_box(values)))
        });

        group.bench_with_input(BenchmarkId::new("min_max_fixed", len), &fixed, |bench, values| {
            bench.iter(|| min_max(black_box(values)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fixed_point,
    benchmark_conversion,
    benchmark_random,
    benchmark_generic
);
criterion_main!(benches);
