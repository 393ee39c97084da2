//! Benchmarks for relief generation.
//!
//! Run with: cargo bench -p relief-mesher
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p relief-mesher -- --save-baseline main
//! 2. After changes: cargo bench -p relief-mesher -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relief_mesher::{generate_relief, ReliefParams};
use relief_types::Raster;

// =============================================================================
// Test Raster Generation
// =============================================================================

/// Diagonal gradient raster with a transparent circular hole, so the
/// benchmark exercises masked quads and interior walls as well as the
/// plain height field.
fn gradient_raster(size: u32) -> Raster {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let center = f64::from(size) / 2.0;
    let hole_radius = f64::from(size) / 6.0;

    for y in 0..size {
        for x in 0..size {
            let value = ((x + y) * 255 / (2 * size - 2)) as u8;
            let dx = f64::from(x) - center;
            let dy = f64::from(y) - center;
            let alpha = if dx.hypot(dy) < hole_radius { 0 } else { 255 };
            data.extend_from_slice(&[value, value, value, alpha]);
        }
    }

    Raster::from_rgba8(size, size, data).expect("sized buffer")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_relief_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReliefGeneration");
    group.sample_size(10); // Large rasters are slow
    let params = ReliefParams::default();

    for size in [32u32, 128, 512] {
        let raster = gradient_raster(size);
        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(BenchmarkId::new("generate", size), &raster, |b, raster| {
            b.iter(|| generate_relief(black_box(raster), black_box(&params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_relief_generation);
criterion_main!(benches);
