//! Conversion of classified way segments into the road graph and buildings.
pub mod buildings;
pub mod roads;
pub mod way;

pub use buildings::build_buildings;
pub use roads::{build_road_graph, RoadGraphBuilder};
pub use way::{LatLon, Projection, WaySegment};
