//! Performance benchmarks for risk stratification.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vitalscreen::{
    CardioMetrics, FaceMetrics, GaitMetrics, MeasurementBundle, RiskStratifier, VoiceMetrics,
};

fn full_bundle() -> MeasurementBundle {
    MeasurementBundle::new(
        CardioMetrics {
            heart_rate_bpm: 72.0,
            hrv_sdnn_ms: 45.0,
            respiratory_rate_bpm: 15.0,
        },
        GaitMetrics {
            symmetry_percent: 90.0,
            balance_stability_percent: 88.0,
            cadence_steps_per_min: 100.0,
            avg_stride_length_m: 0.72,
        },
        FaceMetrics {
            asymmetry_score: 0.05,
            eye_openness: 0.85,
        },
        VoiceMetrics {
            max_phonation_secs: 8.0,
            jitter_percent: Some(0.4),
            shimmer_percent: Some(1.2),
            hnr_db: Some(22.0),
        },
    )
}

fn bench_stratify(c: &mut Criterion) {
    let stratifier = RiskStratifier::with_defaults();
    let full = full_bundle();
    let empty = MeasurementBundle::unmeasured();

    c.bench_function("stratify_full_bundle", |b| {
        b.iter(|| stratifier.stratify(black_box(&full)))
    });

    c.bench_function("stratify_sentinel_bundle", |b| {
        b.iter(|| stratifier.stratify(black_box(&empty)))
    });
}

criterion_group!(benches, bench_stratify);
criterion_main!(benches);
