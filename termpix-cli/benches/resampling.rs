// ABOUTME: Benchmark for box-filter downsampling across common source resolutions
// ABOUTME: Measures unpack plus resample for photo-sized inputs into terminal-sized targets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termpix_core::{box_resample, fit, unpack};

fn gradient(width: u32, height: u32) -> Vec<u8> {
    (0..width * height)
        .flat_map(|i| {
            let x = (i % width) as u8;
            let y = (i / width) as u8;
            [x, y, x ^ y]
        })
        .collect()
}

fn benchmark_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_resample");

    for &(width, height) in [(640, 480), (1920, 1080), (4000, 3000)].iter() {
        let pixels = gradient(width, height);
        let source = unpack(&pixels, width, height, 3).unwrap();
        let target = fit(width, height, 200, 60).unwrap();

        group.bench_with_input(
            BenchmarkId::new("resample", format!("{}x{}", width, height)),
            &source,
            |b, source| {
                b.iter(|| box_resample(black_box(source), target).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unpack", format!("{}x{}", width, height)),
            &pixels,
            |b, pixels| {
                b.iter(|| unpack(black_box(pixels), width, height, 3).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_resample);
criterion_main!(benches);
