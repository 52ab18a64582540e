// Metrics hooks for the `closest` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then every `Matcher` reports latency and outcome for each call to
// [`Matcher::nearest`](crate::Matcher::nearest). This keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// How a single lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Served from the query cache without scanning.
    CacheHit,
    /// Served by a linear scan of the collection.
    Scan,
    /// Consume mode with every entry already returned.
    Exhausted,
}

/// Metrics observer for matcher lookups.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a lookup.
    ///
    /// `outcome` is how the call was satisfied, `latency` is the wall-clock
    /// duration between the start and end of the call, and `scanned` is the
    /// number of candidate entries evaluated (zero for cache hits and
    /// exhaustion).
    fn record_lookup(&self, outcome: LookupOutcome, latency: Duration, scanned: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global lookup metrics recorder.
///
/// This is typically called once during startup so all `Matcher` instances
/// share the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}
