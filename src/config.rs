//! Matcher configuration.
//!
//! This module defines the public configuration surface for the matcher. It
//! is intentionally free of any I/O or environment-dependent behavior so a
//! matcher is a pure function of `(collection, config, query sequence)`.

use serde::{Deserialize, Serialize};

use crate::types::MatchError;

/// Semantic configuration for a [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatcherConfig {
    /// Configuration schema version.
    ///
    /// Any change to matching semantics must bump this version so that
    /// stored configurations remain replayable and comparable.
    pub version: u32,
    /// Consume collection entries on match.
    ///
    /// When enabled, each collection index is returned at most once until a
    /// reset and answers are never memoized. When disabled, answers are
    /// memoized per distinct query and entries may repeat freely.
    pub consume: bool,
}

impl MatcherConfig {
    /// Create a new configuration with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable consume-on-match.
    pub fn with_consume(mut self, consume: bool) -> Self {
        self.consume = consume;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version < 1 {
            return Err(MatchError::InvalidConfigVersion {
                version: self.version,
            });
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            version: 1,
            consume: false,
        }
    }
}
