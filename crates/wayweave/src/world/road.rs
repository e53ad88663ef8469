//! Road graph storage.
//!
//! Road nodes live in a [`SlotMap`] arena and are addressed by [`RoadKey`] handles.
//! Adjacency is kept beside the arena as a neighbor list per node, so the graph has no
//! ownership cycles. Edges are undirected: [`RoadGraph::connect`] always records both
//! directions, never links a node to itself, and never duplicates an edge.
use std::collections::HashMap;

use glam::DVec2;
use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::geometry::Rect;
use crate::ids::ElementId;

new_key_type! {
    /// Stable handle of a [`RoadNode`] inside a [`RoadGraph`].
    pub struct RoadKey;
}

/// A vertex of the road network.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadNode {
    /// Road-typed identifier assigned by the graph builder.
    pub id: ElementId,
    /// Raw external node id this vertex was created from.
    pub source: u64,
    /// Position in game coordinates.
    pub position: DVec2,
}

/// Undirected road graph.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    nodes: SlotMap<RoadKey, RoadNode>,
    adjacency: SecondaryMap<RoadKey, Vec<RoadKey>>,
    by_source: HashMap<u64, RoadKey>,
    edge_count: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            adjacency: SecondaryMap::with_capacity(capacity),
            by_source: HashMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Adds a node without edges and returns its handle.
    pub fn insert(&mut self, node: RoadNode) -> RoadKey {
        let source = node.source;
        let key = self.nodes.insert(node);
        self.adjacency.insert(key, Vec::new());
        self.by_source.insert(source, key);
        key
    }

    /// Links `a` and `b` in both directions.
    ///
    /// Returns `false` when nothing changed: a self-loop, an existing edge, or an unknown key.
    pub fn connect(&mut self, a: RoadKey, b: RoadKey) -> bool {
        if a == b || !self.nodes.contains_key(a) || !self.nodes.contains_key(b) {
            return false;
        }
        if self.are_connected(a, b) {
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(a) {
            list.push(b);
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.push(a);
        }
        self.edge_count += 1;
        true
    }

    pub fn are_connected(&self, a: RoadKey, b: RoadKey) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Neighbors of `key`; empty for unknown keys.
    pub fn neighbors(&self, key: RoadKey) -> &[RoadKey] {
        self.adjacency.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, key: RoadKey) -> Option<&RoadNode> {
        self.nodes.get(key)
    }

    pub fn position(&self, key: RoadKey) -> Option<DVec2> {
        self.nodes.get(key).map(|n| n.position)
    }

    /// Looks up the node created for a raw external node id.
    pub fn find_by_source(&self, source: u64) -> Option<RoadKey> {
        self.by_source.get(&source).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoadKey, &RoadNode)> {
        self.nodes.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = RoadKey> + '_ {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Bounding rectangle of all node positions, `None` for an empty graph.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.nodes.values().map(|n| n.position))
    }
}
