#![forbid(unsafe_code)]
//! wayweave: road graph construction and building-to-road connectivity synthesis.
//!
//! Modules:
//! - convert: turn classified, projected way segments into a road graph and buildings
//! - world: road graph arena, buildings, connections, and the container holding them
//! - synth: attach buildings to nearby roads (radius expansion, clustering, culling)
//! - geometry: rectangles and closest-point helpers in game coordinates
pub mod convert;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod synth;
pub mod world;

/// Convenient re-exports for common types. Import with `use wayweave::prelude::*;`.
pub mod prelude {
    pub use glam::DVec2;

    pub use crate::convert::{
        build_buildings, build_road_graph, LatLon, Projection, RoadGraphBuilder, WaySegment,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{closest_point_on_segment, Rect};
    pub use crate::ids::{ElementId, ElementKind};
    pub use crate::synth::events::{EventSink, FnSink, MultiSink, SynthesisEvent, VecSink};
    pub use crate::synth::{
        synthesize, synthesize_with_events, ClosestProtection, SynthesisConfig, SynthesisReport,
        Synthesizer,
    };
    pub use crate::world::{
        Building, Connection, Container, Metadata, RoadGraph, RoadKey, RoadNode,
    };
}
