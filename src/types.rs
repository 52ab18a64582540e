//! Result and error types for nearest-point matching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::point::Point;

/// A single nearest-neighbor result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchHit {
    /// The winning collection entry.
    pub closest: Point,
    /// Zero-based index of the winning entry in the reference collection.
    pub index: usize,
    /// Metric value between query and winner: absolute difference in one
    /// dimension, squared Euclidean distance otherwise.
    pub distance: f64,
}

/// Errors returned by matcher construction and lookup.
///
/// Every failure is reported before matcher state changes, so a call that
/// returns an error leaves the query cache and the consumed set exactly as
/// they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// The reference collection was empty at construction.
    #[error("reference collection must not be empty")]
    EmptyCollection,

    /// A collection entry's dimensionality differed from the first entry's.
    #[error("mixed dimensionality: entry {index} has {got} component(s); expected {expected}")]
    MixedDimensions {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// The query's dimensionality differed from the collection's.
    #[error("query dimensionality mismatch: expected {expected} component(s), got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Config schema version below the minimum supported.
    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}
