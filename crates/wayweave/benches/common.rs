#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayweave::prelude::{DVec2, WaySegment};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Street grid ways with `blocks` blocks per side and one building per block.
pub fn grid_town(blocks: u64, seed: u64) -> (Vec<WaySegment>, Vec<WaySegment>) {
    const SPACING: f64 = 50.0;
    let mut rng = StdRng::seed_from_u64(seed);
    let lines = blocks + 1;
    let node = |gx: u64, gy: u64| gy * lines + gx;
    let at = |gx: u64, gy: u64| DVec2::new(gx as f64 * SPACING, gy as f64 * SPACING);

    let mut roads = Vec::with_capacity(2 * lines as usize);
    for i in 0..lines {
        roads.push(WaySegment::new(
            i,
            (0..lines).map(|g| node(g, i)).collect(),
            (0..lines).map(|g| at(g, i)).collect(),
        ));
        roads.push(WaySegment::new(
            lines + i,
            (0..lines).map(|g| node(i, g)).collect(),
            (0..lines).map(|g| at(i, g)).collect(),
        ));
    }

    let mut buildings = Vec::with_capacity((blocks * blocks) as usize);
    let mut next_node = lines * lines;
    for gy in 0..blocks {
        for gx in 0..blocks {
            let size = 8.0 + rng.random::<f64>() * 12.0;
            let slack = SPACING - size - 10.0;
            let origin = at(gx, gy)
                + DVec2::new(
                    5.0 + rng.random::<f64>() * slack,
                    5.0 + rng.random::<f64>() * slack,
                );
            buildings.push(WaySegment::new(
                gy * blocks + gx,
                (next_node..next_node + 4).collect(),
                vec![
                    origin,
                    origin + DVec2::new(size, 0.0),
                    origin + DVec2::new(size, size),
                    origin + DVec2::new(0.0, size),
                ],
            ));
            next_node += 4;
        }
    }

    (roads, buildings)
}
