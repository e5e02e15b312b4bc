// ABOUTME: Benchmark for truecolor escape stream rendering
// ABOUTME: Tests block glyph output for typical terminal-sized grids

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termpix_core::{BlockRenderer, ColorGrid, Rgb};

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_rendering");
    let renderer = BlockRenderer::new();

    for &(columns, rows) in [(80, 24), (200, 60)].iter() {
        let pixels = (0..columns * rows)
            .map(|i| Rgb::new((i % 256) as u8, (i / 256) as u8, 128))
            .collect();
        let grid = ColorGrid::from_pixels(columns, rows, pixels).unwrap();

        group.bench_with_input(
            BenchmarkId::new("render", format!("{}x{}", columns, rows)),
            &grid,
            |b, grid| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(grid.pixels().len() * 24);
                    renderer.render(black_box(grid), &mut out).unwrap();
                    out
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_render);
criterion_main!(benches);
