use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::info;
use wayweave::prelude::*;

/// Installs a fmt subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

/// Procedural street grid with buildings scattered inside the blocks.
#[derive(Debug, Clone)]
pub struct TownConfig {
    /// Blocks per side.
    pub blocks: u64,
    /// Distance between parallel streets.
    pub spacing: f64,
    /// Buildings per block.
    pub buildings_per_block: usize,
    /// Probability that a street segment is missing.
    pub gap_probability: f64,
    pub seed: u64,
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            blocks: 10,
            spacing: 60.0,
            buildings_per_block: 3,
            gap_probability: 0.15,
            seed: 42,
        }
    }
}

impl TownConfig {
    pub fn with_blocks(mut self, blocks: u64) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Road and building ways for the town.
    ///
    /// Streets are emitted as two-node ways so missing segments leave dead ends.
    pub fn ways(&self) -> (Vec<WaySegment>, Vec<WaySegment>) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let lines = self.blocks + 1;
        let node = |gx: u64, gy: u64| gy * lines + gx;
        let at = |gx: u64, gy: u64| DVec2::new(gx as f64, gy as f64) * self.spacing;

        let mut roads = Vec::new();
        let mut way_id = 0;
        for gy in 0..lines {
            for gx in 0..lines {
                let mut push = |to: (u64, u64)| {
                    roads.push(WaySegment::new(
                        way_id,
                        vec![node(gx, gy), node(to.0, to.1)],
                        vec![at(gx, gy), at(to.0, to.1)],
                    ));
                    way_id += 1;
                };
                if gx + 1 < lines && rng.random::<f64>() >= self.gap_probability {
                    push((gx + 1, gy));
                }
                if gy + 1 < lines && rng.random::<f64>() >= self.gap_probability {
                    push((gx, gy + 1));
                }
            }
        }

        let mut buildings = Vec::new();
        let mut next_node = lines * lines;
        let margin = self.spacing * 0.1;
        for gy in 0..self.blocks {
            for gx in 0..self.blocks {
                for _ in 0..self.buildings_per_block {
                    let size = DVec2::new(
                        self.spacing * (0.1 + 0.2 * rng.random::<f64>()),
                        self.spacing * (0.1 + 0.2 * rng.random::<f64>()),
                    );
                    let slack = DVec2::splat(self.spacing - 2.0 * margin) - size;
                    let origin = at(gx, gy)
                        + DVec2::splat(margin)
                        + DVec2::new(rng.random::<f64>(), rng.random::<f64>()) * slack;
                    buildings.push(WaySegment::new(
                        buildings.len() as u64,
                        (next_node..next_node + 4).collect(),
                        vec![
                            origin,
                            origin + DVec2::new(size.x, 0.0),
                            origin + size,
                            origin + DVec2::new(0.0, size.y),
                        ],
                    ));
                    next_node += 4;
                }
            }
        }

        (roads, buildings)
    }

    pub fn build(&self) -> Result<Container> {
        let (roads, buildings) = self.ways();
        Container::from_ways(None, &roads, &buildings)
    }
}

/// Logs connection statistics for a container.
pub fn log_summary(label: &str, container: &Container) {
    let mut histogram = [0usize; 6];
    let mut total_distance = 0.0;
    for building in &container.buildings {
        let n = building.connections().len().min(histogram.len() - 1);
        histogram[n] += 1;
        total_distance += building.connections().iter().map(|c| c.distance).sum::<f64>();
    }
    let connections = container.total_connections().max(1) as f64;
    info!(
        "{} | roads: {} | buildings: {} | average: {:.3} | mean distance: {:.2} | histogram 0..5+: {:?}",
        label,
        container.roads.len(),
        container.buildings.len(),
        container.average_connections(),
        total_distance / connections,
        histogram,
    );
}
