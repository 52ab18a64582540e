//! # Closest
//!
//! Exact nearest-point matching over a fixed reference collection of scalars
//! or fixed-length numeric vectors. Given a query point, the matcher returns
//! the collection entry with the smallest distance, its index, and the
//! distance itself.
//!
//! ## Contract
//!
//! - The reference collection is captured once at construction and never
//!   changes; indices in results are stable for the matcher's lifetime.
//! - Dimensionality is derived from the first entry and enforced for every
//!   entry and every query. The distance function is fixed at construction:
//!   absolute difference in one dimension, squared Euclidean distance
//!   otherwise (the square root is never taken; it cannot change the
//!   ordering).
//! - Ties resolve to the lowest index, always.
//! - A memoizing matcher answers repeated structurally equal queries from a
//!   query cache. A consuming matcher returns each entry at most once until
//!   a reset, and never caches.
//! - Lookups are synchronous and single-threaded; all state lives in the
//!   [`Matcher`] value.
//!
//! ## Example
//!
//! ```
//! use closest::{Matcher, Point};
//!
//! let mut matcher = Matcher::memoizing(vec![
//!     Point::Scalar(1.0),
//!     Point::Scalar(5.0),
//!     Point::Scalar(9.0),
//! ])
//! .unwrap();
//!
//! let hit = matcher.nearest(&Point::Scalar(4.0)).unwrap().unwrap();
//! assert_eq!(hit.closest, Point::Scalar(5.0));
//! assert_eq!(hit.index, 1);
//! assert_eq!(hit.distance, 1.0);
//! ```
//!
//! For one-to-one pairing, build the matcher with [`Matcher::consuming`]:
//! every lookup removes its winner from future consideration, and the
//! matcher reports `None` once the collection is exhausted.

pub mod config;
pub mod distance;
pub mod engine;
pub mod metrics;
pub mod point;
pub mod types;

pub use crate::config::MatcherConfig;
pub use crate::distance::DistanceFn;
pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, LookupOutcome, MatchMetrics};
pub use crate::point::Point;
pub use crate::types::{MatchError, MatchHit};
