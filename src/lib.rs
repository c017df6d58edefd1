//! rangecache: LRU-backed memoization for range-sum queries over a mutable slice.
//!
//! Two layers: a generic fixed-capacity LRU cache ([`policy::lru::LruCache`])
//! with O(1) get/insert/remove/evict, and a domain adapter
//! ([`range_sum::RangeSumCache`]) that memoizes range sums over a caller-owned
//! slice and invalidates exactly the entries overlapping a point update.

pub mod ds;
pub mod error;
pub mod policy;
pub mod range_sum;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
