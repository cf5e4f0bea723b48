//! Benchmarks for the scoring engine hot paths.
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- normal_cdf

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mindgauge::certificate::calculate_certificate_values;
use mindgauge::core::AssessmentScore;
use mindgauge::domains::MainCategory;
use mindgauge::numeric::normal_cdf;
use mindgauge::report::build_report;

fn sample_score() -> AssessmentScore {
    let mut score = AssessmentScore {
        total_score: 112,
        main_category: Some(MainCategory::IqTest),
        ..Default::default()
    };
    for (key, value) in [
        ("logical-reasoning", 24),
        ("numerical-ability", 18),
        ("spatial-reasoning", 27),
        ("verbal-ability", 21),
        ("memory", 22),
    ] {
        score.by_category.insert(key.to_string(), value);
    }
    score
}

fn bench_normal_cdf(c: &mut Criterion) {
    c.bench_function("normal_cdf_sweep", |b| {
        b.iter(|| {
            for i in -40..=40 {
                black_box(normal_cdf(black_box(i as f64 / 10.0)));
            }
        })
    });
}

fn bench_certificate(c: &mut Criterion) {
    let score = sample_score();
    c.bench_function("calculate_certificate_values", |b| {
        b.iter(|| {
            black_box(calculate_certificate_values(
                black_box(&score),
                "asmt-9e8d7c6b5a",
            ))
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let score = sample_score();
    c.bench_function("build_report", |b| {
        b.iter(|| black_box(build_report(black_box(&score), 160)))
    });
}

criterion_group!(benches, bench_normal_cdf, bench_certificate, bench_report);
criterion_main!(benches);
