//! Radius expansion and culling driver.
use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::synth::closest::{check_outline, closest_connection};
use crate::synth::cluster::{deduplicate, DEFAULT_HOP_LIMIT};
use crate::synth::cull::{cull_worst_scoring, ClosestProtection};
use crate::synth::events::{EventSink, SynthesisEvent};
use crate::synth::filter::roads_within;
use crate::world::building::Building;
use crate::world::road::RoadGraph;
use crate::world::Container;

/// Configuration for a synthesis run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Connect distance of the first pass, in game units. Doubled after every pass.
    pub initial_connect_distance: u64,
    /// Maximum number of passes before giving up with [`Error::NonConvergence`].
    pub max_passes: usize,
    /// Hop limit for collapsing nearby candidates into one connection.
    pub cluster_hop_limit: usize,
    /// Whether culling may remove a building's closest connection.
    pub closest_protection: ClosestProtection,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            initial_connect_distance: 4,
            max_passes: 24,
            cluster_hop_limit: DEFAULT_HOP_LIMIT,
            closest_protection: ClosestProtection::Unprotected,
        }
    }
}

impl SynthesisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connect distance of the first pass.
    pub fn with_initial_connect_distance(mut self, distance: u64) -> Self {
        self.initial_connect_distance = distance;
        self
    }

    /// Sets the pass cap.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Sets the cluster hop limit.
    pub fn with_cluster_hop_limit(mut self, hops: usize) -> Self {
        self.cluster_hop_limit = hops;
        self
    }

    /// Sets the closest-connection protection used while culling.
    pub fn with_closest_protection(mut self, protection: ClosestProtection) -> Self {
        self.closest_protection = protection;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.initial_connect_distance == 0 {
            return Err(Error::InvalidConfig(
                "initial_connect_distance must be > 0".into(),
            ));
        }
        if self.max_passes == 0 {
            return Err(Error::InvalidConfig("max_passes must be > 0".into()));
        }
        Ok(())
    }
}

/// Summary of a successful synthesis run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisReport {
    /// Radius passes executed.
    pub passes: usize,
    /// Connect distance of the last pass.
    pub final_threshold: u64,
    /// Average connections per building once the target was reached.
    pub expanded_average: f64,
    /// Connections added across all passes.
    pub added: usize,
    /// Connections removed by culling.
    pub removed: usize,
    /// Average connections per building after culling.
    pub final_average: f64,
}

/// Runs synthesis over containers with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    pub config: SynthesisConfig,
}

impl Synthesizer {
    pub fn try_new(config: SynthesisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Attaches buildings to roads until `target_average` connections per building.
    pub fn run(&self, container: &mut Container, target_average: f64) -> Result<SynthesisReport> {
        run_internal(&self.config, container, target_average, &mut ())
    }

    pub fn run_with_events(
        &self,
        container: &mut Container,
        target_average: f64,
        sink: &mut dyn EventSink,
    ) -> Result<SynthesisReport> {
        run_internal(&self.config, container, target_average, sink)
    }
}

/// Runs synthesis with the default configuration.
pub fn synthesize(container: &mut Container, target_average: f64) -> Result<SynthesisReport> {
    run_internal(&SynthesisConfig::default(), container, target_average, &mut ())
}

/// Runs synthesis with `config`, reporting progress to `sink`.
pub fn synthesize_with_events(
    container: &mut Container,
    target_average: f64,
    config: &SynthesisConfig,
    sink: &mut dyn EventSink,
) -> Result<SynthesisReport> {
    run_internal(config, container, target_average, sink)
}

fn run_internal(
    config: &SynthesisConfig,
    container: &mut Container,
    target_average: f64,
    sink: &mut dyn EventSink,
) -> Result<SynthesisReport> {
    config.validate()?;
    if !target_average.is_finite() || target_average < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "target average must be finite and >= 0, got {target_average}"
        )));
    }

    sink.send(SynthesisEvent::Started {
        target: target_average,
        building_count: container.buildings.len(),
        road_count: container.roads.len(),
    });

    if container.buildings.is_empty() {
        warn!("Container has no buildings; nothing to connect.");
        sink.send(SynthesisEvent::Warning {
            context: "container".into(),
            message: "Container has no buildings".into(),
        });
        let report = SynthesisReport::default();
        sink.send(SynthesisEvent::Finished {
            report: report.clone(),
        });
        return Ok(report);
    }

    for building in &container.buildings {
        check_outline(building)?;
    }

    // Past this threshold every road node is a candidate for every building, so another
    // pass cannot add anything.
    let saturation = container
        .extent()
        .map(|extent| extent.diagonal() + 1.0)
        .unwrap_or(0.0);

    let mut threshold = config.initial_connect_distance;
    let mut passes = 0;
    let mut added = 0;
    let expanded_average = loop {
        let pass_added = connect_pass(
            &container.roads,
            &mut container.buildings,
            threshold,
            config.cluster_hop_limit,
        )?;
        added += pass_added;
        let average = container.average_connections();

        info!(
            "Pass {} | threshold: {} | added: {} | average: {:.3}.",
            passes, threshold, pass_added, average
        );
        sink.send(SynthesisEvent::PassFinished {
            pass: passes,
            threshold,
            added: pass_added,
            average,
        });
        passes += 1;

        if average >= target_average {
            break average;
        }

        threshold = match threshold.checked_mul(2) {
            Some(next) if passes < config.max_passes && threshold as f64 <= saturation => next,
            _ => {
                warn!(
                    "Average {:.3} is below target {} after {} passes; giving up.",
                    average, target_average, passes
                );
                sink.send(SynthesisEvent::Warning {
                    context: format!("threshold {threshold}"),
                    message: format!(
                        "Average {average:.3} below target {target_average} after {passes} passes"
                    ),
                });
                return Err(Error::NonConvergence {
                    passes,
                    threshold,
                    average,
                    target: target_average,
                });
            }
        };
    };

    let excess = ((expanded_average - target_average) * container.buildings.len() as f64).round();
    let requested = if excess >= 1.0 { excess as usize } else { 0 };
    let removed = cull_worst_scoring(
        &mut container.buildings,
        requested,
        config.closest_protection,
    );
    sink.send(SynthesisEvent::Culled { requested, removed });

    let report = SynthesisReport {
        passes,
        final_threshold: threshold,
        expanded_average,
        added,
        removed,
        final_average: container.average_connections(),
    };
    info!(
        "Synthesis finished after {} passes | removed: {} | average: {:.3}.",
        report.passes, report.removed, report.final_average
    );
    sink.send(SynthesisEvent::Finished {
        report: report.clone(),
    });

    Ok(report)
}

/// Adds connections within `threshold` to every building; returns how many were added.
///
/// Connections from earlier passes are kept. Each building only reads the road graph
/// and writes its own connection list.
fn connect_pass(
    roads: &RoadGraph,
    buildings: &mut [Building],
    threshold: u64,
    hop_limit: usize,
) -> Result<usize> {
    let reach = threshold as f64;
    let mut added = 0;

    for building in buildings.iter_mut() {
        let Some(bounds) = building.bounds() else {
            continue;
        };
        let search = bounds.expand(reach);

        let mut close_enough = HashMap::new();
        for (key, node) in roads_within(&search, roads) {
            let candidate = closest_connection(building, key, node.position)?;
            if candidate.distance.round() < reach {
                close_enough.insert(key, candidate);
            }
        }

        let before = building.connections().len();
        for connection in deduplicate(roads, &close_enough, hop_limit) {
            building.add_connection(connection);
        }
        let gained = building.connections().len() - before;
        if gained > 0 {
            debug!(
                "Building {} gained {} connections at threshold {}.",
                building.id, gained, threshold
            );
        }
        added += gained;
    }

    Ok(added)
}
