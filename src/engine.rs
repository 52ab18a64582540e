//! Nearest-neighbor matching engine.
//!
//! [`Matcher`] owns an immutable snapshot of the reference collection plus
//! the mutable lookup state (query cache and consumed-index set). Lookups
//! are synchronous and run to completion inside the caller's invocation;
//! nothing here is shared or locked.

use std::time::Instant;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::distance::DistanceFn;
use crate::metrics::{metrics_recorder, LookupOutcome};
use crate::point::{Point, PointKey};
use crate::types::{MatchError, MatchHit};


/// Exact nearest-point matcher over an immutable reference collection.
///
/// Construction validates the collection (non-empty, homogeneous
/// dimensionality) and fixes the distance function from the dimensionality
/// of the first entry. Lookups either memoize per-query answers or consume
/// the winning entry, depending on [`MatcherConfig::consume`].
pub struct Matcher {
    entries: Vec<Point>,
    dimensions: usize,
    distance_fn: DistanceFn,
    consume: bool,
    cache: HashMap<PointKey, MatchHit>,
    consumed: HashSet<usize>,
}

impl Matcher {
    /// Construct a matcher over `points` with an explicit config.
    ///
    /// The collection is captured by value, so later lookups never observe
    /// external mutation. Fails on an invalid config, an empty collection,
    /// or mixed dimensionality.
    pub fn new(points: Vec<Point>, cfg: &MatcherConfig) -> Result<Self, MatchError> {
        cfg.validate()?;

        let first = points.first().ok_or(MatchError::EmptyCollection)?;
        let dimensions = first.dimensions();
        for (index, point) in points.iter().enumerate().skip(1) {
            let got = point.dimensions();
            if got != dimensions {
                return Err(MatchError::MixedDimensions {
                    index,
                    expected: dimensions,
                    got,
                });
            }
        }

        let distance_fn = DistanceFn::for_dimensions(dimensions);
        debug!(
            entries = points.len(),
            dimensions,
            consume = cfg.consume,
            distance_fn = ?distance_fn,
            "matcher_built"
        );

        Ok(Self {
            entries: points,
            dimensions,
            distance_fn,
            consume: cfg.consume,
            cache: HashMap::new(),
            consumed: HashSet::new(),
        })
    }

    /// Memoizing matcher: repeated structurally equal queries are answered
    /// from the query cache without rescanning.
    pub fn memoizing(points: Vec<Point>) -> Result<Self, MatchError> {
        Self::new(points, &MatcherConfig::default())
    }

    /// Consuming matcher: each entry is returned at most once until a reset,
    /// and answers are never cached.
    pub fn consuming(points: Vec<Point>) -> Result<Self, MatchError> {
        Self::new(points, &MatcherConfig::default().with_consume(true))
    }

    /// Find the collection entry nearest to `query`.
    ///
    /// Returns `Ok(None)` only in consume mode once every entry has been
    /// returned; that is a signal, not a fault. A dimensionality mismatch
    /// fails before any state is touched, so the query cache and the
    /// consumed set are exactly as they were.
    pub fn nearest(&mut self, query: &Point) -> Result<Option<MatchHit>, MatchError> {
        let start = Instant::now();

        let got = query.dimensions();
        if got != self.dimensions {
            return Err(MatchError::DimensionMismatch {
                expected: self.dimensions,
                got,
            });
        }

        // Memoized answers are only consulted when entries are not being
        // consumed; a consuming matcher may answer the same query
        // differently on every call.
        let key = if self.consume { None } else { Some(query.key()) };
        if let Some(key) = key.as_ref() {
            if let Some(hit) = self.cache.get(key) {
                let hit = hit.clone();
                self.observe(LookupOutcome::CacheHit, start, 0);
                trace!(index = hit.index, distance = hit.distance, "match_cache_hit");
                return Ok(Some(hit));
            }
        }

        if self.consume && self.consumed.len() == self.entries.len() {
            self.observe(LookupOutcome::Exhausted, start, 0);
            trace!(entries = self.entries.len(), "match_exhausted");
            return Ok(None);
        }

        let (index, distance, scanned) = self.scan(query);
        if self.consume {
            self.consumed.insert(index);
        }

        let hit = MatchHit {
            closest: self.entries[index].clone(),
            index,
            distance,
        };
        if let Some(key) = key {
            self.cache.insert(key, hit.clone());
        }

        self.observe(LookupOutcome::Scan, start, scanned);
        trace!(index, distance, scanned, "match_scan");
        Ok(Some(hit))
    }

    /// Linear scan in index order. The running best starts at index 0 with
    /// infinite distance; a candidate wins only when strictly closer, so
    /// ties keep the earliest index.
    fn scan(&self, query: &Point) -> (usize, f64, usize) {
        let query_components = query.components();
        let mut best_index = 0usize;
        let mut best_distance = f64::INFINITY;
        let mut scanned = 0usize;

        for (index, candidate) in self.entries.iter().enumerate() {
            if self.consume && self.consumed.contains(&index) {
                continue;
            }
            let distance = self
                .distance_fn
                .evaluate(query_components, candidate.components());
            scanned += 1;
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        (best_index, best_distance, scanned)
    }

    /// Reset lookup state according to the configured mode.
    ///
    /// A consuming matcher only forgets which entries were returned; a
    /// memoizing matcher drops its cached answers.
    pub fn reset(&mut self) {
        if self.consume {
            self.reset_consumed_only();
        } else {
            self.reset_all();
        }
    }

    /// Clear the query cache and the consumed-index set.
    pub fn reset_all(&mut self) {
        let cache_dropped = self.cache.len();
        let consumed_dropped = self.consumed.len();
        self.cache.clear();
        self.consumed.clear();
        debug!(cache_dropped, consumed_dropped, "matcher_reset_all");
    }

    /// Clear only the consumed-index set, keeping memoized answers.
    pub fn reset_consumed_only(&mut self) {
        let consumed_dropped = self.consumed.len();
        self.consumed.clear();
        debug!(consumed_dropped, "matcher_reset_consumed");
    }

    /// The reference collection snapshot.
    pub fn points(&self) -> &[Point] {
        &self.entries
    }

    /// Dimensionality shared by every collection entry.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Whether entries are consumed on match.
    pub fn is_consuming(&self) -> bool {
        self.consume
    }

    /// Entries still available to consume-mode lookups.
    ///
    /// Equals the collection length when consume mode is disabled.
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.consumed.len()
    }

    /// True when consume mode has returned every entry.
    pub fn is_exhausted(&self) -> bool {
        self.consume && self.consumed.len() == self.entries.len()
    }

    /// Number of memoized answers currently held.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    fn observe(&self, outcome: LookupOutcome, start: Instant, scanned: usize) {
        if let Some(recorder) = metrics_recorder() {
            recorder.record_lookup(outcome, start.elapsed(), scanned);
        }
    }
}
