//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! malformed way input, identifier construction, degenerate building outlines, radius expansion
//! that never reaches its target, invalid synthesis parameters, and generic errors.
use thiserror::Error;

use crate::ids::ElementKind;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("invalid {kind} identifier {raw}")]
    InvalidIdentifier { raw: u64, kind: ElementKind },

    #[error("degenerate geometry: {0}")]
    Geometry(String),

    #[error(
        "average connections {average:.3} still below target {target} after {passes} passes (threshold {threshold})"
    )]
    NonConvergence {
        passes: usize,
        threshold: u64,
        average: f64,
        target: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
