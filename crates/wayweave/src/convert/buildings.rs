//! Building construction from way segments.
use crate::convert::way::WaySegment;
use crate::error::Result;
use crate::ids::{ElementId, ElementKind};
use crate::world::building::Building;

/// Builds one [`Building`] per way; the way id becomes the building id.
pub fn build_buildings(ways: &[WaySegment]) -> Result<Vec<Building>> {
    let mut buildings = Vec::with_capacity(ways.len());
    for way in ways {
        way.validate()?;
        let id = ElementId::new(way.id, ElementKind::Building)?;
        for &raw in &way.nodes {
            ElementId::new(raw, ElementKind::Node)?;
        }
        buildings.push(Building::new(id, way.geometry.clone()));
    }
    Ok(buildings)
}
