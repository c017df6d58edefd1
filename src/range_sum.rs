//! Range-sum memoization over a caller-owned slice.
//!
//! [`RangeSumCache`] binds the generic [`LruCache`] to range-sum semantics:
//! a query key is the inclusive range `(left, right)`, the cached value is the
//! precomputed sum over `array[left..=right]`, and a point update invalidates
//! exactly the cached ranges that contain the written index.
//!
//! ```text
//!   driver ──► RangeSumCache ──► LruCache<(usize, usize), T>
//!                   │
//!                   └──► &[T] / &mut [T]   (caller-owned, borrowed per call)
//! ```
//!
//! ## Contract
//!
//! - **Transparency**: `range_sum` always returns the true sum of the current
//!   slice contents, as if no cache existed. A hit never reads the slice.
//! - **Exact invalidation**: after `apply_update(i, v)`, every cached
//!   `(l, r)` with `l <= i <= r` is gone; every other entry survives
//!   untouched.
//! - **Cost model**: invalidation scans every held key, O(live entries)
//!   bounded by capacity. The adapter deliberately maintains no interval
//!   index; that linear scan is part of the contract, not an oversight.
//!
//! Out-of-range inputs are caller contract violations and come back as
//! [`OutOfBoundsError`], never clamped.

use std::iter::Sum;

use crate::error::{ConfigError, OutOfBoundsError};
#[cfg(feature = "metrics")]
use crate::metrics::{MetricsSnapshotProvider, RangeSumMetrics, RangeSumMetricsSnapshot};
use crate::policy::lru::LruCache;
use crate::traits::MutableCache;

/// Inclusive range key: `(left, right)` with `left <= right`.
pub type RangeKey = (usize, usize);

/// LRU-backed memoizer for range sums over a caller-owned slice.
///
/// The slice itself is never stored; it is borrowed for the duration of each
/// call, read on a miss and written on an update. The cache owns only the
/// memoized sums.
///
/// # Example
///
/// ```
/// use rangecache::range_sum::RangeSumCache;
///
/// let mut array = vec![5i64, 5, 5, 5, 5];
/// let mut cache = RangeSumCache::try_new(16).unwrap();
///
/// assert_eq!(cache.range_sum(&array, 0, 4).unwrap(), 25);
///
/// // The write lands first, then every overlapping entry is dropped.
/// cache.apply_update(&mut array, 2, 100).unwrap();
/// assert_eq!(cache.range_sum(&array, 0, 4).unwrap(), 120);
/// ```
#[derive(Debug)]
pub struct RangeSumCache<T> {
    lru: LruCache<RangeKey, T>,
    #[cfg(feature = "metrics")]
    metrics: RangeSumMetrics,
}

impl<T> RangeSumCache<T>
where
    T: Copy + Sum<T>,
{
    /// Creates an adapter whose LRU holds at most `capacity` range sums.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            lru: LruCache::try_new(capacity)?,
            #[cfg(feature = "metrics")]
            metrics: RangeSumMetrics::default(),
        })
    }

    /// Returns the sum over `array[left..=right]`, serving from cache when the
    /// range was memoized and the slice has not been updated through it since.
    ///
    /// On a miss the sum is computed by direct summation, stored, and
    /// returned. Either way the result equals the true sum of the current
    /// slice contents.
    pub fn range_sum(&mut self, array: &[T], left: usize, right: usize) -> Result<T, OutOfBoundsError> {
        check_range(array.len(), left, right)?;

        if let Some(&sum) = self.lru.get(&(left, right)) {
            #[cfg(feature = "metrics")]
            self.metrics.record_range_hit();
            return Ok(sum);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_range_miss();

        let sum: T = array[left..=right].iter().copied().sum();
        self.lru.insert((left, right), sum);
        Ok(sum)
    }

    /// Writes `array[index] = value`, then drops every cached range containing
    /// `index`.
    ///
    /// The write happens before the scan, so a failed bounds check leaves both
    /// the slice and the cache untouched.
    pub fn apply_update(
        &mut self,
        array: &mut [T],
        index: usize,
        value: T,
    ) -> Result<(), OutOfBoundsError> {
        if index >= array.len() {
            return Err(OutOfBoundsError::Index {
                index,
                len: array.len(),
            });
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_update();

        array[index] = value;
        self.invalidate_index(index);
        Ok(())
    }

    /// Drops every cached range `(l, r)` with `l <= index <= r`, returning how
    /// many entries were removed.
    ///
    /// Public so that a caller who mutates the slice directly can still keep
    /// the cache honest. The scan walks every held key by design (see module
    /// docs).
    pub fn invalidate_index(&mut self, index: usize) -> usize {
        let stale: Vec<RangeKey> = self
            .lru
            .keys()
            .copied()
            .filter(|&(left, right)| left <= index && index <= right)
            .collect();
        self.lru.remove_batch(&stale);

        #[cfg(feature = "metrics")]
        self.metrics.record_invalidation(stale.len());

        stale.len()
    }

    /// Returns the memoized sum for `(left, right)` without promoting it or
    /// recomputing. Intended for observability and tests.
    pub fn cached(&self, left: usize, right: usize) -> Option<T> {
        self.lru.peek(&(left, right)).copied()
    }

    /// Number of memoized ranges.
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Returns `true` if nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// Maximum number of memoized ranges.
    pub fn capacity(&self) -> usize {
        self.lru.capacity()
    }

    /// Drops every memoized range.
    pub fn clear(&mut self) {
        self.lru.clear();
    }
}

fn check_range(len: usize, left: usize, right: usize) -> Result<(), OutOfBoundsError> {
    if left > right {
        return Err(OutOfBoundsError::Inverted { left, right });
    }
    if right >= len {
        return Err(OutOfBoundsError::Range { left, right, len });
    }
    Ok(())
}

#[cfg(feature = "metrics")]
impl<T> RangeSumCache<T>
where
    T: Copy + Sum<T>,
{
    /// Captures the current counters plus size gauges.
    pub fn metrics_snapshot(&self) -> RangeSumMetricsSnapshot {
        RangeSumMetricsSnapshot {
            range_calls: self.metrics.range_calls,
            range_hits: self.metrics.range_hits,
            range_misses: self.metrics.range_misses,
            update_calls: self.metrics.update_calls,
            invalidation_scans: self.metrics.invalidation_scans,
            entries_invalidated: self.metrics.entries_invalidated,
            cache_len: self.lru.len(),
            capacity: self.lru.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<RangeSumMetricsSnapshot> for RangeSumCache<T>
where
    T: Copy + Sum<T>,
{
    fn snapshot(&self) -> RangeSumMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// Shared wrapper (feature "concurrency")
// ---------------------------------------------------------------------------

/// Thread-safe range-sum store: the slice and its cache live under a single
/// mutex so an update's write and invalidation scan are one atomic step
/// relative to any concurrent query.
///
/// Splitting them under separate locks would let a query observe the slice
/// after a write but the cache before invalidation, returning a stale sum.
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct SharedRangeSum<T> {
    inner: parking_lot::Mutex<SharedState<T>>,
}

#[cfg(feature = "concurrency")]
#[derive(Debug)]
struct SharedState<T> {
    array: Vec<T>,
    cache: RangeSumCache<T>,
}

#[cfg(feature = "concurrency")]
impl<T> SharedRangeSum<T>
where
    T: Copy + Sum<T>,
{
    /// Takes ownership of the array and pairs it with a cache of `capacity`
    /// range sums.
    pub fn try_new(array: Vec<T>, capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: parking_lot::Mutex::new(SharedState {
                array,
                cache: RangeSumCache::try_new(capacity)?,
            }),
        })
    }

    /// Sum over `[left, right]`, cached.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<T, OutOfBoundsError> {
        let mut guard = self.inner.lock();
        let state = &mut *guard;
        state.cache.range_sum(&state.array, left, right)
    }

    /// Point update; the write and the invalidation scan happen under one
    /// lock acquisition.
    pub fn apply_update(&self, index: usize, value: T) -> Result<(), OutOfBoundsError> {
        let mut guard = self.inner.lock();
        let state = &mut *guard;
        state.cache.apply_update(&mut state.array, index, value)
    }

    /// Length of the owned array.
    pub fn len(&self) -> usize {
        self.inner.lock().array.len()
    }

    /// Returns `true` if the owned array is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().array.is_empty()
    }

    /// Runs `f` against the owned array under the lock.
    pub fn with_array<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.inner.lock().array)
    }
}
