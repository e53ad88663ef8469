//! Classified way segments as delivered by the upstream query stage.
use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geographic coordinate in degrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Maps geographic coordinates into planar game coordinates.
///
/// Supplied by the host; any `Fn(f64, f64) -> mint::Point2<f64>` taking `(lat, lon)` works.
pub trait Projection {
    fn to_game(&self, lat: f64, lon: f64) -> mint::Point2<f64>;
}

impl<F> Projection for F
where
    F: Fn(f64, f64) -> mint::Point2<f64>,
{
    #[inline]
    fn to_game(&self, lat: f64, lon: f64) -> mint::Point2<f64> {
        self(lat, lon)
    }
}

/// An ordered run of raw nodes with their projected positions.
///
/// `geometry[i]` is the position of `nodes[i]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WaySegment {
    /// Raw external way id.
    pub id: u64,
    /// Raw external node ids in traversal order.
    pub nodes: Vec<u64>,
    /// Game-space position of each node.
    pub geometry: Vec<DVec2>,
}

impl WaySegment {
    pub fn new(id: u64, nodes: Vec<u64>, geometry: Vec<DVec2>) -> Self {
        Self {
            id,
            nodes,
            geometry,
        }
    }

    /// Projects geographic geometry through `projection`.
    pub fn from_lat_lon<P: Projection + ?Sized>(
        id: u64,
        nodes: Vec<u64>,
        geometry: &[LatLon],
        projection: &P,
    ) -> Self {
        let geometry = geometry
            .iter()
            .map(|ll| DVec2::from(projection.to_game(ll.lat, ll.lon)))
            .collect();
        Self {
            id,
            nodes,
            geometry,
        }
    }

    /// Checks that every listed node has a position.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::Input(format!("way {} has no nodes", self.id)));
        }
        if self.nodes.len() != self.geometry.len() {
            return Err(Error::Input(format!(
                "way {} lists {} nodes but {} geometry points",
                self.id,
                self.nodes.len(),
                self.geometry.len()
            )));
        }
        Ok(())
    }

    /// Pairs of `(raw node id, position)` in traversal order.
    pub fn points(&self) -> impl Iterator<Item = (u64, DVec2)> + '_ {
        self.nodes.iter().copied().zip(self.geometry.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lat_lon_uses_projection() {
        let projection = |lat: f64, lon: f64| mint::Point2 {
            x: lon * 100.0,
            y: lat * 100.0,
        };
        let way = WaySegment::from_lat_lon(
            0,
            vec![0, 1],
            &[LatLon::new(0.0, 0.0), LatLon::new(0.5, 0.25)],
            &projection,
        );
        assert_eq!(way.geometry, vec![DVec2::ZERO, DVec2::new(25.0, 50.0)]);
        assert!(way.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_geometry() {
        let way = WaySegment::new(3, vec![0, 1, 2], vec![DVec2::ZERO, DVec2::ONE]);
        let err = way.validate().unwrap_err();
        assert!(matches!(err, Error::Input(ref msg) if msg.contains("way 3")));

        let empty = WaySegment::new(4, Vec::new(), Vec::new());
        assert!(matches!(empty.validate(), Err(Error::Input(_))));
    }
}
