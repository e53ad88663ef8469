//! Building-to-road connectivity synthesis.
//!
//! [`Synthesizer::run`] attaches every building to nearby road nodes in passes of growing
//! search radius until the average number of connections per building reaches a target,
//! then removes the worst-scoring connections to pull the average back toward it.
//!
//! Stages, per building and pass:
//! - [`filter`]: road nodes inside the building bounds grown by the current threshold
//! - [`closest`]: distance and closest outline point for each of those nodes
//! - [`cluster`]: one connection per local road cluster
//!
//! After the last pass, [`cull`] removes connections globally.
pub mod closest;
pub mod cluster;
pub mod cull;
pub mod events;
pub mod filter;
mod runner;

pub use cull::ClosestProtection;
pub use runner::{
    synthesize, synthesize_with_events, SynthesisConfig, SynthesisReport, Synthesizer,
};
