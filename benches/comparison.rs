use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

// ---------------------------------------------------------------------------
// Gamma: precise engine vs fast engine vs libm's tgamma
// ---------------------------------------------------------------------------

fn gamma_reduced(c: &mut Criterion) {
    // x < 12 exercises the argument-reduction path
    let mut g = c.benchmark_group("gamma_x_5_5");

    g.bench_function("precise", |b| {
        b.iter(|| gamma_approx::gamma(black_box(5.5_f64)))
    });

    g.bench_function("fast", |b| {
        b.iter(|| gamma_approx::fast::gamma(black_box(5.5_f64)))
    });

    g.bench_function("libm", |b| b.iter(|| libm::tgamma(black_box(5.5_f64))));

    g.finish();
}

fn gamma_asymptotic(c: &mut Criterion) {
    // x ≥ 12 goes straight to the Stirling form
    let mut g = c.benchmark_group("gamma_x_50_5");

    g.bench_function("precise", |b| {
        b.iter(|| gamma_approx::gamma(black_box(50.5_f64)))
    });

    g.bench_function("fast", |b| {
        b.iter(|| gamma_approx::fast::gamma(black_box(50.5_f64)))
    });

    g.bench_function("libm", |b| b.iter(|| libm::tgamma(black_box(50.5_f64))));

    g.finish();
}

fn gamma_integer_table(c: &mut Criterion) {
    let mut g = c.benchmark_group("gamma_x_20");

    g.bench_function("precise", |b| {
        b.iter(|| gamma_approx::gamma(black_box(20.0_f64)))
    });

    g.bench_function("factorial_int", |b| {
        b.iter(|| gamma_approx::factorial_int(black_box(19_i64)))
    });

    g.bench_function("libm", |b| b.iter(|| libm::tgamma(black_box(20.0_f64))));

    g.finish();
}

// ---------------------------------------------------------------------------
// Log-gamma: precise engine vs both bit estimators vs libm's lgamma
// ---------------------------------------------------------------------------

fn lgamma_large(c: &mut Criterion) {
    let mut g = c.benchmark_group("lgamma_x_1e6");

    g.bench_function("precise", |b| {
        b.iter(|| gamma_approx::lgamma(black_box(1.0e6_f64)))
    });

    g.bench_function("fast", |b| {
        b.iter(|| gamma_approx::fast::lgamma(black_box(1.0e6_f64)))
    });

    g.bench_function("fast_corrected", |b| {
        b.iter(|| gamma_approx::fast::lgamma_corrected(black_box(1.0e6_f64)))
    });

    g.bench_function("libm", |b| b.iter(|| libm::lgamma(black_box(1.0e6_f64))));

    g.finish();
}

fn lgamma_f32(c: &mut Criterion) {
    let mut g = c.benchmark_group("lgamma_f32_x_1e6");

    g.bench_function("precise", |b| {
        b.iter(|| gamma_approx::lgamma(black_box(1.0e6_f32)))
    });

    g.bench_function("fast", |b| {
        b.iter(|| gamma_approx::fast::lgamma(black_box(1.0e6_f32)))
    });

    g.bench_function("libm", |b| b.iter(|| libm::lgammaf(black_box(1.0e6_f32))));

    g.finish();
}

criterion_group!(
    benches,
    gamma_reduced,
    gamma_asymptotic,
    gamma_integer_table,
    lgamma_large,
    lgamma_f32
);
criterion_main!(benches);
