//! Closest point between a road node and a building outline.
use glam::DVec2;

use crate::error::{Error, Result};
use crate::geometry::closest_point_on_segment;
use crate::world::building::{Building, Connection};
use crate::world::road::RoadKey;

/// Fails with [`Error::Geometry`] unless the outline has at least two distinct points.
pub fn check_outline(building: &Building) -> Result<()> {
    let outline = building.outline();
    let distinct = outline
        .first()
        .is_some_and(|first| outline.iter().any(|p| p != first));
    if !distinct {
        return Err(Error::Geometry(format!(
            "building {} outline needs at least 2 distinct points, got {}",
            building.id,
            outline.len()
        )));
    }
    Ok(())
}

/// Computes the connection candidate from `building` to the road node at `position`.
///
/// Every outline edge is tested; the first edge reaching the minimum distance supplies
/// the point.
pub fn closest_connection(
    building: &Building,
    road: RoadKey,
    position: DVec2,
) -> Result<Connection> {
    check_outline(building)?;

    let mut best_distance = f64::INFINITY;
    let mut best_point = DVec2::ZERO;
    for (a, b) in building.edges() {
        let (point, distance) = closest_point_on_segment(a, b, position);
        if distance < best_distance {
            best_distance = distance;
            best_point = point;
        }
    }

    Ok(Connection::new(road, best_distance, best_point))
}
