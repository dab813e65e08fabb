#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use organic_grid::prelude::GridConfig;

const SAMPLE_SIZE: usize = 30;
const WARM_UP: Duration = Duration::from_millis(500);
const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn grid_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// One element per placed cell.
pub fn cell_throughput(config: &GridConfig) -> Throughput {
    Throughput::Elements(config.cell_count().max(1) as u64)
}

pub fn sample_throughput(samples: usize) -> Throughput {
    Throughput::Elements(samples as u64)
}
