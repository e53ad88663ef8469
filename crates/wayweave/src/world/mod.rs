//! The finished world: road graph, buildings, and projection metadata.
pub mod building;
pub mod road;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use building::{Building, Connection};
pub use road::{RoadGraph, RoadKey, RoadNode};

use crate::convert::{build_buildings, build_road_graph, WaySegment};
use crate::error::Result;
use crate::geometry::Rect;

/// Describes the area a world was generated from.
///
/// The lat/lon box is what the host's projection was derived from; this crate carries it
/// along without interpreting it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    /// Width of the game area in game units.
    pub width: u32,
    /// Height of the game area in game units.
    pub height: u32,
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Metadata {
    pub fn new(width: u32, height: u32, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        Self {
            width,
            height,
            min_lat: lat1.min(lat2),
            min_lon: lon1.min(lon2),
            max_lat: lat1.max(lat2),
            max_lon: lon1.max(lon2),
        }
    }
}

/// Road graph and buildings of one map.
#[derive(Clone, Debug, Default)]
pub struct Container {
    pub metadata: Option<Metadata>,
    pub roads: RoadGraph,
    pub buildings: Vec<Building>,
}

impl Container {
    pub fn new(metadata: Option<Metadata>, roads: RoadGraph, buildings: Vec<Building>) -> Self {
        Self {
            metadata,
            roads,
            buildings,
        }
    }

    /// Builds a container from classified, projected way segments.
    pub fn from_ways(
        metadata: Option<Metadata>,
        road_ways: &[WaySegment],
        building_ways: &[WaySegment],
    ) -> Result<Self> {
        let buildings = build_buildings(building_ways)?;
        let roads = build_road_graph(road_ways)?;
        Ok(Self::new(metadata, roads, buildings))
    }

    pub fn total_connections(&self) -> usize {
        self.buildings.iter().map(|b| b.connections().len()).sum()
    }

    /// Mean number of connections per building; zero when there are no buildings.
    pub fn average_connections(&self) -> f64 {
        if self.buildings.is_empty() {
            return 0.0;
        }
        self.total_connections() as f64 / self.buildings.len() as f64
    }

    /// Bounding rectangle of every road node and building outline point.
    pub fn extent(&self) -> Option<Rect> {
        let buildings = self.buildings.iter().filter_map(Building::bounds);
        self.roads
            .bounds()
            .into_iter()
            .chain(buildings)
            .reduce(|a, b| a.union(&b))
    }
}
