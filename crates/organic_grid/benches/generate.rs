mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use organic_grid::prelude::*;

const SIDES: [i32; 4] = [4, 16, 64, 128];

fn generate_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/dots");

    for &side in &SIDES {
        let config = GridConfig::new(side, side, 8.0)
            .with_gap(4.0)
            .with_displacement(3.0)
            .with_smoothness(0.05)
            .with_seed(0xA11CE ^ side as u64);
        group.throughput(common::cell_throughput(&config));

        group.bench_with_input(BenchmarkId::from_parameter(side), &config, |b, config| {
            b.iter(|| {
                let records = generate_shapes(config, None).expect("valid config");
                black_box(records.len());
            });
        });
    }

    group.finish();
}

fn generate_variant_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/variants");
    let config = GridConfig::new(32, 32, 8.0).with_displacement(3.0);
    group.throughput(common::cell_throughput(&config));

    for variants in [2usize, 8, 32] {
        group.bench_with_input(
            BenchmarkId::from_parameter(variants),
            &variants,
            |b, &variants| {
                b.iter(|| {
                    let records = generate_shapes(&config, Some(variants)).expect("valid config");
                    black_box(records.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::grid_criterion();
    targets = generate_benches, generate_variant_benches
}
criterion_main!(benches);
