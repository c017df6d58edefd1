//! Operation counters for the cache layers (feature `metrics`).
//!
//! Recorders are plain counter structs owned by the cache that records into
//! them; consumers take [`Snapshot`](MetricsSnapshotProvider) copies so that
//! benches and tests never hold references into live cache state.
//!
//! | Type                    | Recorded by       |
//! |-------------------------|-------------------|
//! | [`LruMetrics`]          | `LruCache`        |
//! | [`RangeSumMetrics`]     | `RangeSumCache`   |

/// Read-side access to a copyable metrics snapshot.
pub trait MetricsSnapshotProvider<S> {
    /// Captures a point-in-time copy of the counters.
    fn snapshot(&self) -> S;
}

// ---------------------------------------------------------------------------
// LRU policy counters
// ---------------------------------------------------------------------------

/// Counters recorded by the LRU policy core.
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
}

impl LruMetrics {
    pub fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    pub fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    pub fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    pub fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    pub fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    pub fn record_remove(&mut self, found: bool) {
        self.remove_calls += 1;
        if found {
            self.remove_found += 1;
        }
    }

    pub fn record_touch(&mut self, found: bool) {
        self.touch_calls += 1;
        if found {
            self.touch_found += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Point-in-time copy of [`LruMetrics`] plus size gauges.
#[derive(Debug, Default, Clone, Copy)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,

    pub evicted_entries: u64,

    pub remove_calls: u64,
    pub remove_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

// ---------------------------------------------------------------------------
// Range-sum adapter counters
// ---------------------------------------------------------------------------

/// Counters recorded by the range-sum adapter.
#[derive(Debug, Default)]
pub struct RangeSumMetrics {
    pub range_calls: u64,
    pub range_hits: u64,
    pub range_misses: u64,
    pub update_calls: u64,
    pub invalidation_scans: u64,
    pub entries_invalidated: u64,
}

impl RangeSumMetrics {
    pub fn record_range_hit(&mut self) {
        self.range_calls += 1;
        self.range_hits += 1;
    }

    pub fn record_range_miss(&mut self) {
        self.range_calls += 1;
        self.range_misses += 1;
    }

    pub fn record_update(&mut self) {
        self.update_calls += 1;
    }

    pub fn record_invalidation(&mut self, removed: usize) {
        self.invalidation_scans += 1;
        self.entries_invalidated += removed as u64;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Point-in-time copy of [`RangeSumMetrics`] plus size gauges.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeSumMetricsSnapshot {
    pub range_calls: u64,
    pub range_hits: u64,
    pub range_misses: u64,

    pub update_calls: u64,
    pub invalidation_scans: u64,
    pub entries_invalidated: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl RangeSumMetricsSnapshot {
    /// Fraction of range queries answered from cache.
    pub fn hit_rate(&self) -> f64 {
        if self.range_calls == 0 {
            0.0
        } else {
            self.range_hits as f64 / self.range_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lru_counters_accumulate() {
        let mut m = LruMetrics::default();
        m.record_get_hit();
        m.record_get_miss();
        m.record_insert_new();
        m.record_insert_update();
        m.record_evicted_entry();
        m.record_remove(true);
        m.record_remove(false);

        assert_eq!(m.get_calls, 2);
        assert_eq!(m.get_hits, 1);
        assert_eq!(m.get_misses, 1);
        assert_eq!(m.insert_calls, 2);
        assert_eq!(m.evicted_entries, 1);
        assert_eq!(m.remove_calls, 2);
        assert_eq!(m.remove_found, 1);

        m.reset();
        assert_eq!(m.get_calls, 0);
    }

    #[test]
    fn range_sum_hit_rate() {
        let mut m = RangeSumMetrics::default();
        m.record_range_hit();
        m.record_range_hit();
        m.record_range_miss();
        m.record_invalidation(3);

        let snap = RangeSumMetricsSnapshot {
            range_calls: m.range_calls,
            range_hits: m.range_hits,
            range_misses: m.range_misses,
            update_calls: m.update_calls,
            invalidation_scans: m.invalidation_scans,
            entries_invalidated: m.entries_invalidated,
            cache_len: 0,
            capacity: 4,
        };
        assert!((snap.hit_rate() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(snap.entries_invalidated, 3);
    }

    #[test]
    fn empty_snapshot_hit_rate_is_zero() {
        let snap = RangeSumMetricsSnapshot::default();
        assert_eq!(snap.hit_rate(), 0.0);
    }
}
