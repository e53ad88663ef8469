//! Collapses topologically close connection candidates.
//!
//! Candidates are grouped by a breadth-first walk over the road graph from a seed
//! candidate, bounded by a hop limit. Seeds are taken closest first, so each walk's seed
//! is the connection it keeps. Every node a walk reaches is claimed and never seeds a
//! later walk, so two emitted connections are always more than the limit apart.
use std::collections::{HashMap, HashSet, VecDeque};

use crate::world::building::Connection;
use crate::world::road::{RoadGraph, RoadKey};

/// Default hop limit for a cluster walk.
pub const DEFAULT_HOP_LIMIT: usize = 5;

/// Keeps one connection per local cluster of `candidates`.
///
/// The walk crosses every road node within `hop_limit` hops of the seed, candidate or
/// not. Walks are independent: a node claimed by an earlier walk still carries a later
/// one. Seeds are ordered by distance, ties broken by key, so the output is
/// deterministic for a given graph.
pub fn deduplicate(
    roads: &RoadGraph,
    candidates: &HashMap<RoadKey, Connection>,
    hop_limit: usize,
) -> Vec<Connection> {
    let mut seeds: Vec<&Connection> = candidates.values().collect();
    seeds.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.road.cmp(&b.road))
    });

    let mut claimed: HashSet<RoadKey> = HashSet::with_capacity(candidates.len());
    let mut seen: HashSet<RoadKey> = HashSet::new();
    let mut queue: VecDeque<(RoadKey, usize)> = VecDeque::new();
    let mut passing = Vec::new();

    for seed in seeds {
        if claimed.contains(&seed.road) {
            continue;
        }

        seen.clear();
        seen.insert(seed.road);
        queue.clear();
        queue.push_back((seed.road, 0));

        while let Some((current, depth)) = queue.pop_front() {
            claimed.insert(current);
            if depth == hop_limit {
                continue;
            }
            for &next in roads.neighbors(current) {
                if seen.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }

        passing.push(*seed);
    }

    passing
}
