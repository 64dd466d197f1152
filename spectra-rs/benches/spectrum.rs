use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectra_rs::kernel::KernelLifecycle;
use spectra_rs::signal::traits::SpectrumAnalyze;
use spectra_rs::{FftPlan, Sides, SpectrumAnalyzer, SpectrumConfig, WindowKind};

fn tone_frame(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let phase = core::f64::consts::TAU * i as f64 / n as f64;
            (phase * 17.0).sin() + 0.25 * (phase * 63.0).sin()
        })
        .collect()
}

fn forward_1024(c: &mut Criterion) {
    let plan = FftPlan::try_new(1024).expect("valid plan size");
    let frame = tone_frame(1024);

    c.bench_function("forward_1024", |b| {
        b.iter(|| {
            black_box(
                plan.forward(&frame)
                    .expect("benchmark frame matches the plan size"),
            );
        });
    });
}

fn analyzer_hann_1024(c: &mut Criterion) {
    let analyzer = SpectrumAnalyzer::try_new(SpectrumConfig {
        fft_size: 1024,
        sample_rate: 48_000.0,
        window: WindowKind::Hann,
        sides: Sides::One,
    })
    .expect("valid analyzer config");
    let frame = tone_frame(1024);

    c.bench_function("analyzer_hann_1024", |b| {
        b.iter(|| {
            black_box(
                analyzer
                    .run_alloc(&frame)
                    .expect("benchmark frame satisfies analyzer preconditions"),
            );
        });
    });
}

criterion_group!(benches, forward_1024, analyzer_hann_1024);
criterion_main!(benches);
