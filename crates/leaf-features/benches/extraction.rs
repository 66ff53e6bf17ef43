//! Benchmarks for leaf feature extraction.
//!
//! Run with: cargo bench -p leaf-features

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgb, RgbImage};
use leaf_features::{FeatureExtractor, LeafImage};

/// Veined green leaf with a few rust blotches
fn create_leaf(size: u32) -> LeafImage {
    let frame = RgbImage::from_fn(size, size, |x, y| {
        let vein = (x + y) % 24 < 2 || x.abs_diff(size / 2) < 2;
        let blotch = (x / 40 + y / 40) % 7 == 0 && (x % 40) < 10 && (y % 40) < 10;
        if blotch {
            Rgb([180, 80, 40])
        } else if vein {
            Rgb([150, 200, 120])
        } else {
            Rgb([40, 140, 45])
        }
    });
    LeafImage::from_rgb(frame).expect("non-empty leaf")
}

fn bench_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::new();
    let mut group = c.benchmark_group("extract");

    for size in [128u32, 512, 2048] {
        let leaf = create_leaf(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &leaf, |b, leaf| {
            b.iter(|| extractor.extract(black_box(leaf)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
