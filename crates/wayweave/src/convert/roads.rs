//! Road graph construction from way segments.
//!
//! Raw node ids are resolved through one map shared by every way, so two ways that pass
//! through the same real-world node (an intersection) share a single [`RoadNode`].
use std::collections::HashMap;

use tracing::debug;

use crate::convert::way::WaySegment;
use crate::error::Result;
use crate::ids::{ElementId, ElementKind};
use crate::world::road::{RoadGraph, RoadKey, RoadNode};

/// Incremental road graph builder.
///
/// Road ids come from a counter owned by the builder, so ids are unique and stable
/// within one build.
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    graph: RoadGraph,
    placed: HashMap<u64, RoadKey>,
    next_road_id: u64,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with room for `nodes` distinct road nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            graph: RoadGraph::with_capacity(nodes),
            placed: HashMap::with_capacity(nodes),
            next_road_id: 0,
        }
    }

    /// Adds one way, linking each node to the next in traversal order.
    pub fn add_way(&mut self, way: &WaySegment) -> Result<()> {
        way.validate()?;

        let mut prev: Option<RoadKey> = None;
        for (raw, position) in way.points() {
            let key = match self.placed.get(&raw) {
                Some(&key) => key,
                None => {
                    let id = ElementId::new(self.next_road_id, ElementKind::Road)?;
                    self.next_road_id += 1;
                    let key = self.graph.insert(RoadNode {
                        id,
                        source: raw,
                        position,
                    });
                    self.placed.insert(raw, key);
                    key
                }
            };

            if let Some(prev) = prev {
                self.graph.connect(prev, key);
            }
            prev = Some(key);
        }

        Ok(())
    }

    pub fn finish(self) -> RoadGraph {
        self.graph
    }
}

/// Builds the road graph for a set of road ways.
pub fn build_road_graph(ways: &[WaySegment]) -> Result<RoadGraph> {
    let mut builder = RoadGraphBuilder::with_capacity(ways.iter().map(|w| w.nodes.len()).sum());
    for way in ways {
        builder.add_way(way)?;
    }
    let graph = builder.finish();
    debug!(
        "Built road graph from {} ways: {} nodes, {} edges.",
        ways.len(),
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use glam::DVec2;

    use super::*;
    use crate::error::Error;

    fn way(id: u64, nodes: &[u64], points: &[(f64, f64)]) -> WaySegment {
        WaySegment::new(
            id,
            nodes.to_vec(),
            points.iter().map(|&(x, y)| DVec2::new(x, y)).collect(),
        )
    }

    fn sample_ways() -> Vec<WaySegment> {
        vec![
            way(0, &[0, 1, 2], &[(0.0, 0.0), (0.0, 50.0), (50.0, 50.0)]),
            way(1, &[2, 3, 4], &[(50.0, 50.0), (100.0, 50.0), (100.0, 100.0)]),
            way(2, &[5, 3], &[(100.0, 0.0), (100.0, 50.0)]),
        ]
    }

    #[test]
    fn shared_nodes_merge_into_intersections() {
        let graph = build_road_graph(&sample_ways()).unwrap();

        assert_eq!(graph.len(), 6);
        assert_eq!(graph.edge_count(), 5);

        let n2 = graph.find_by_source(2).unwrap();
        let n3 = graph.find_by_source(3).unwrap();
        assert_eq!(graph.neighbors(n2).len(), 2);

        let mut around_3: Vec<u64> = graph
            .neighbors(n3)
            .iter()
            .map(|&k| graph.get(k).unwrap().source)
            .collect();
        around_3.sort_unstable();
        assert_eq!(around_3, vec![2, 4, 5]);
    }

    #[test]
    fn edges_are_symmetric_without_self_loops() {
        let mut ways = sample_ways();
        // Repeated node and a way retracing an existing edge.
        ways.push(way(3, &[4, 4, 3], &[(100.0, 100.0), (100.0, 100.0), (100.0, 50.0)]));
        let graph = build_road_graph(&ways).unwrap();

        assert_eq!(graph.edge_count(), 5);
        for (key, _) in graph.iter() {
            let neighbors = graph.neighbors(key);
            assert!(!neighbors.contains(&key));
            let unique: HashSet<_> = neighbors.iter().collect();
            assert_eq!(unique.len(), neighbors.len());
            for &n in neighbors {
                assert!(graph.neighbors(n).contains(&key));
            }
        }
    }

    #[test]
    fn incremental_builder_matches_batch_build() {
        let ways = sample_ways();
        let mut builder = RoadGraphBuilder::with_capacity(2);
        for w in &ways {
            builder.add_way(w).unwrap();
        }
        let incremental = builder.finish();
        let batch = build_road_graph(&ways).unwrap();

        assert_eq!(incremental.len(), batch.len());
        assert_eq!(incremental.edge_count(), batch.edge_count());
    }

    #[test]
    fn road_ids_are_unique_and_road_typed() {
        let graph = build_road_graph(&sample_ways()).unwrap();
        let ids: HashSet<ElementId> = graph.iter().map(|(_, n)| n.id).collect();
        assert_eq!(ids.len(), graph.len());
        assert!(ids.iter().all(|id| id.kind() == ElementKind::Road));
    }

    #[test]
    fn first_sighting_fixes_position() {
        let ways = vec![
            way(0, &[7, 8], &[(1.0, 1.0), (2.0, 2.0)]),
            way(1, &[8, 9], &[(2.5, 2.5), (3.0, 3.0)]),
        ];
        let graph = build_road_graph(&ways).unwrap();
        let n8 = graph.find_by_source(8).unwrap();
        assert_eq!(graph.position(n8), Some(DVec2::new(2.0, 2.0)));
    }

    #[test]
    fn malformed_way_is_an_input_error() {
        let ways = vec![way(0, &[0, 1], &[(0.0, 0.0)])];
        assert!(matches!(build_road_graph(&ways), Err(Error::Input(_))));
    }

    #[test]
    fn empty_input_yields_empty_graph() {
        let graph = build_road_graph(&[]).unwrap();
        assert!(graph.is_empty());
    }
}
