//! Performance benchmarks for key estimation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tonal_dsp::{analyze_key, KeyConfig};

fn bench_analyze_key(c: &mut Criterion) {
    // Synthetic chroma matrix: 12 pitch classes over ~30s of frames at a
    // 512-sample hop (44.1kHz), with a C-major-ish energy tilt.
    let frames = 2584;
    let chroma: Vec<Vec<f32>> = (0..12)
        .map(|p| {
            let bias = match p {
                0 | 4 | 7 => 1.0f32,
                2 | 5 | 9 | 11 => 0.5,
                _ => 0.1,
            };
            (0..frames)
                .map(|t| bias * (1.0 + (t as f32 * 0.01).sin().abs()))
                .collect()
        })
        .collect();

    let config = KeyConfig::default();

    c.bench_function("analyze_key_30s", |b| {
        b.iter(|| {
            let _ = analyze_key(black_box(&chroma), black_box(config));
        });
    });
}

criterion_group!(benches, bench_analyze_key);
criterion_main!(benches);
