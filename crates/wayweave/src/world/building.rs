//! Buildings and their attachments to the road graph.
use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::ids::ElementId;
use crate::world::road::RoadKey;

/// One attachment from a building to a road node.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    /// Road node this connection attaches to.
    pub road: RoadKey,
    /// Minimum distance from the road node to the building outline.
    pub distance: f64,
    /// Closest point on the building outline.
    pub point: DVec2,
}

impl Connection {
    pub fn new(road: RoadKey, distance: f64, point: DVec2) -> Self {
        debug_assert!(distance >= 0.0, "distance must be non-negative");
        Self {
            road,
            distance,
            point,
        }
    }
}

/// A building outline plus the connections assigned to it.
///
/// The outline is a closed loop: the last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub id: ElementId,
    outline: Vec<DVec2>,
    connections: Vec<Connection>,
}

impl Building {
    pub fn new(id: ElementId, outline: Vec<DVec2>) -> Self {
        Self {
            id,
            outline,
            connections: Vec::new(),
        }
    }

    pub fn outline(&self) -> &[DVec2] {
        &self.outline
    }

    /// Iterates the outline edges `(point[i], point[(i + 1) % n])`.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.outline.len();
        (0..n).map(move |i| (self.outline[i], self.outline[(i + 1) % n]))
    }

    /// Bounding rectangle of the outline, `None` when the outline is empty.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.outline.iter().copied())
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Appends a connection unless one to the same road node already exists.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        if self.is_connected_to(connection.road) {
            return false;
        }
        self.connections.push(connection);
        true
    }

    /// Removes the connection to `road`, returning it if present.
    pub fn remove_connection(&mut self, road: RoadKey) -> Option<Connection> {
        let idx = self.connections.iter().position(|c| c.road == road)?;
        Some(self.connections.remove(idx))
    }

    pub fn is_connected_to(&self, road: RoadKey) -> bool {
        self.connections.iter().any(|c| c.road == road)
    }

    /// Connection with the smallest distance; the earliest wins ties.
    pub fn closest_connection(&self) -> Option<&Connection> {
        self.connections.iter().reduce(|best, c| {
            if c.distance < best.distance {
                c
            } else {
                best
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;
    use crate::ids::ElementKind;

    fn square() -> Building {
        Building::new(
            ElementId::new(1, ElementKind::Building).unwrap(),
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(20.0, 0.0),
                DVec2::new(20.0, 20.0),
                DVec2::new(0.0, 20.0),
            ],
        )
    }

    #[test]
    fn edges_wrap_around() {
        let b = square();
        let edges: Vec<_> = b.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (DVec2::new(0.0, 20.0), DVec2::new(0.0, 0.0)));
    }

    #[test]
    fn connections_are_unique_per_road() {
        let mut keys: SlotMap<RoadKey, ()> = SlotMap::with_key();
        let r1 = keys.insert(());
        let r2 = keys.insert(());

        let mut b = square();
        assert!(b.add_connection(Connection::new(r1, 10.0, DVec2::new(20.0, 0.0))));
        assert!(!b.add_connection(Connection::new(r1, 10.0, DVec2::new(20.0, 0.0))));
        assert!(b.add_connection(Connection::new(r2, 4.0, DVec2::new(0.0, 20.0))));
        assert_eq!(b.connections().len(), 2);

        assert_eq!(b.closest_connection().map(|c| c.road), Some(r2));
        assert!(b.remove_connection(r2).is_some());
        assert!(b.remove_connection(r2).is_none());
        assert_eq!(b.closest_connection().map(|c| c.road), Some(r1));
    }
}
