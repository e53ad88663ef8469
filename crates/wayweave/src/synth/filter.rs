//! Spatial candidate filtering.
use crate::geometry::Rect;
use crate::world::road::{RoadGraph, RoadKey, RoadNode};

/// Returns every road node whose position lies inside `bounds` (inclusive).
///
/// Linear in the number of road nodes; a map tile is small enough that no spatial index
/// is needed.
pub fn roads_within<'a>(bounds: &Rect, roads: &'a RoadGraph) -> Vec<(RoadKey, &'a RoadNode)> {
    roads
        .iter()
        .filter(|(_, node)| bounds.contains_point(node.position))
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::ids::{ElementId, ElementKind};

    #[test]
    fn keeps_only_nodes_inside_expanded_bounds() {
        let mut roads = RoadGraph::new();
        for (i, x) in [10.0, 24.0, 24.5, -4.0, 30.0].into_iter().enumerate() {
            roads.insert(RoadNode {
                id: ElementId::new(i as u64, ElementKind::Road).unwrap(),
                source: i as u64,
                position: DVec2::new(x, 0.0),
            });
        }

        let bounds = Rect::new(DVec2::ZERO, DVec2::new(20.0, 20.0)).expand(4.0);
        let mut xs: Vec<f64> = roads_within(&bounds, &roads)
            .into_iter()
            .map(|(_, n)| n.position.x)
            .collect();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![-4.0, 10.0, 24.0]);
    }
}
