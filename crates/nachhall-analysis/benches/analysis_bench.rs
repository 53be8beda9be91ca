//! Criterion benchmarks for nachhall-analysis components
//!
//! Run with: cargo bench -p nachhall-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nachhall_analysis::{ReverberationAnalyzer, decibel_curve, energy_decay_curve, estimate_decay};

const SAMPLE_RATE: f64 = 44100.0;

/// Decaying noise with a 1 s reverberation time.
fn generate_decay(size: usize) -> Vec<f32> {
    let mut state = 0x12345678u32;
    (0..size)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let noise = (state as i32 as f32) / (i32::MAX as f32);
            let t = i as f64 / SAMPLE_RATE;
            noise * (-6.91 * t).exp() as f32
        })
        .collect()
}

fn bench_decay_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("decay_curve");

    for size in [4096, 44100, 132300] {
        let signal = generate_decay(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &signal, |b, signal| {
            b.iter(|| energy_decay_curve(black_box(signal)).unwrap());
        });
    }

    group.finish();
}

fn bench_slope_estimate(c: &mut Criterion) {
    let signal = generate_decay(132300);
    let db = decibel_curve(&energy_decay_curve(&signal).unwrap());

    c.bench_function("slope_estimate_3s", |b| {
        b.iter(|| estimate_decay(black_box(&db), SAMPLE_RATE).unwrap());
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let signal = generate_decay(132300);
    let analyzer = ReverberationAnalyzer::new(SAMPLE_RATE).unwrap();

    c.bench_function("banded_analysis_3s", |b| {
        b.iter(|| analyzer.analyze(black_box(&signal)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_decay_curve,
    bench_slope_estimate,
    bench_full_analysis
);
criterion_main!(benches);
