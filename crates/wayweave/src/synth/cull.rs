//! Global removal of the worst-scoring connections.
//!
//! A connection scores `distance * connections on its building`, so a far connection on a
//! well-connected building is the first to go. Selection keeps the highest scores in a
//! fixed-capacity min-heap: the root is always the weakest retained entry and is evicted
//! when a higher score arrives.
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use crate::world::building::Building;
use crate::world::road::RoadKey;

/// Whether a building's closest connection may be removed during culling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClosestProtection {
    /// Every connection is scored and eligible for removal.
    #[default]
    Unprotected,
    /// The closest connection of each building scores zero and is never removed.
    ProtectClosest,
}

/// A scored connection, identified by its building index and road node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredConnection {
    pub score: f64,
    pub building: usize,
    pub road: RoadKey,
}

impl Eq for ScoredConnection {}

impl Ord for ScoredConnection {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.building.cmp(&other.building))
            .then_with(|| self.road.cmp(&other.road))
    }
}

impl PartialOrd for ScoredConnection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the `capacity` largest items pushed into it.
#[derive(Debug)]
pub struct TopK<T: Ord> {
    capacity: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Offers an item; it is kept while there is room or when it beats the current minimum.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return;
        }
        let beats_min = self
            .heap
            .peek()
            .is_some_and(|Reverse(min)| item > *min);
        if beats_min {
            self.heap.pop();
            self.heap.push(Reverse(item));
        }
    }

    /// Smallest retained item.
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Retained items, largest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Ascending order of `Reverse<T>` is descending order of `T`.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}

/// Scores each connection of `building`, in connection order.
///
/// `None` marks a connection exempt from removal.
pub fn score_connections(
    building: &Building,
    protection: ClosestProtection,
) -> Vec<Option<f64>> {
    let connections = building.connections();
    let count = connections.len() as f64;
    let protected = match protection {
        ClosestProtection::Unprotected => None,
        ClosestProtection::ProtectClosest => building.closest_connection().map(|c| c.road),
    };

    connections
        .iter()
        .map(|c| {
            if protected == Some(c.road) {
                None
            } else {
                Some(c.distance * count)
            }
        })
        .collect()
}

/// Picks the `num_to_remove` highest-scoring connections across all buildings.
///
/// Scores use the connection counts as they stand before anything is removed.
pub fn select_worst(
    buildings: &[Building],
    num_to_remove: usize,
    protection: ClosestProtection,
) -> Vec<ScoredConnection> {
    let mut worst = TopK::new(num_to_remove);
    for (index, building) in buildings.iter().enumerate() {
        let scores = score_connections(building, protection);
        for (connection, score) in building.connections().iter().zip(scores) {
            if let Some(score) = score {
                worst.push(ScoredConnection {
                    score,
                    building: index,
                    road: connection.road,
                });
            }
        }
    }
    worst.into_sorted_vec()
}

/// Removes the `num_to_remove` worst connections and returns how many were removed.
pub fn cull_worst_scoring(
    buildings: &mut [Building],
    num_to_remove: usize,
    protection: ClosestProtection,
) -> usize {
    if num_to_remove == 0 {
        return 0;
    }

    let selected = select_worst(buildings, num_to_remove, protection);
    let mut removed = 0;
    for entry in &selected {
        if buildings[entry.building].remove_connection(entry.road).is_some() {
            removed += 1;
        }
    }
    debug!("Culled {} of {} requested connections.", removed, num_to_remove);
    removed
}
