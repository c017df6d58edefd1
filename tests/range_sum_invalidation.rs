// ==============================================
// RANGE-SUM ADAPTER TESTS (integration)
// ==============================================
//
// Cache-transparency and invalidation-exactness properties: the adapter must
// be observationally identical to direct summation, and an update must drop
// every overlapping entry and nothing else.

use rangecache::range_sum::RangeSumCache;

fn direct_sum(array: &[i64], left: usize, right: usize) -> i64 {
    array[left..=right].iter().sum()
}

// ==============================================
// Transparency
// ==============================================

#[test]
fn repeated_queries_match_direct_summation() {
    let array: Vec<i64> = (1..=100).collect();
    let mut cache = RangeSumCache::try_new(32).unwrap();

    for &(left, right) in &[(0, 99), (0, 0), (99, 99), (10, 50), (10, 50), (0, 99)] {
        assert_eq!(
            cache.range_sum(&array, left, right).unwrap(),
            direct_sum(&array, left, right),
            "range [{left}, {right}]"
        );
    }
}

#[test]
fn five_fives_update_scenario() {
    // array [5,5,5,5,5]; sum(0,4)=25 cached; update index 2 to 100; recompute 120.
    let mut array = vec![5i64, 5, 5, 5, 5];
    let mut cache = RangeSumCache::try_new(8).unwrap();

    assert_eq!(cache.range_sum(&array, 0, 4).unwrap(), 25);
    assert_eq!(cache.cached(0, 4), Some(25));

    cache.apply_update(&mut array, 2, 100).unwrap();
    assert_eq!(array, vec![5, 5, 100, 5, 5]);
    assert_eq!(cache.cached(0, 4), None);

    assert_eq!(cache.range_sum(&array, 0, 4).unwrap(), 120);
}

#[test]
fn hit_path_is_idempotent_and_reads_no_slice() {
    let mut array = vec![3i64; 20];
    let mut cache = RangeSumCache::try_new(8).unwrap();

    let first = cache.range_sum(&array, 2, 17).unwrap();
    let second = cache.range_sum(&array, 2, 17).unwrap();
    assert_eq!(first, second);

    // Out-of-band mutation is invisible to the hit path: zero slice reads.
    array[10] = -1_000;
    assert_eq!(cache.range_sum(&array, 2, 17).unwrap(), first);
}

#[test]
fn negative_and_zero_sums_are_legitimate_cached_values() {
    // A cached sum of -1 or 0 must be served as a hit, not mistaken for
    // absence.
    let array = vec![-1i64, 0, 1];
    let mut cache = RangeSumCache::try_new(8).unwrap();

    assert_eq!(cache.range_sum(&array, 0, 0).unwrap(), -1);
    assert_eq!(cache.cached(0, 0), Some(-1));
    assert_eq!(cache.range_sum(&array, 0, 0).unwrap(), -1);

    assert_eq!(cache.range_sum(&array, 0, 1).unwrap(), -1);
    assert_eq!(cache.range_sum(&array, 1, 1).unwrap(), 0);
    assert_eq!(cache.cached(1, 1), Some(0));
}

// ==============================================
// Invalidation exactness
// ==============================================

#[test]
fn update_drops_every_overlapping_entry_and_no_other() {
    let mut array = vec![2i64; 30];
    let mut cache = RangeSumCache::try_new(32).unwrap();

    let ranges = [
        (0usize, 9usize),
        (5, 14),
        (10, 19),
        (14, 14),
        (15, 24),
        (20, 29),
    ];
    for &(l, r) in &ranges {
        cache.range_sum(&array, l, r).unwrap();
    }

    cache.apply_update(&mut array, 14, 7).unwrap();

    for &(l, r) in &ranges {
        let overlaps = l <= 14 && 14 <= r;
        if overlaps {
            assert_eq!(cache.cached(l, r), None, "({l}, {r}) should be dropped");
        } else {
            // Survivors keep their pre-update value; they are unaffected by
            // the write.
            assert_eq!(
                cache.cached(l, r),
                Some(direct_sum(&array, l, r)),
                "({l}, {r}) should survive"
            );
        }
    }
}

#[test]
fn dropped_entry_forces_recomputation_on_next_lookup() {
    let mut array = vec![1i64; 10];
    let mut cache = RangeSumCache::try_new(8).unwrap();
    cache.range_sum(&array, 0, 9).unwrap();

    cache.apply_update(&mut array, 0, 11).unwrap();
    assert!(cache.is_empty());
    assert_eq!(cache.range_sum(&array, 0, 9).unwrap(), 20);
    assert_eq!(cache.cached(0, 9), Some(20));
}

#[test]
fn back_to_back_updates_are_safe_on_an_empty_cache() {
    let mut array = vec![0i64; 5];
    let mut cache = RangeSumCache::try_new(4).unwrap();

    cache.apply_update(&mut array, 1, 1).unwrap();
    cache.apply_update(&mut array, 1, 2).unwrap();
    assert_eq!(array[1], 2);
    assert!(cache.is_empty());
}

// ==============================================
// Driver-shaped replay: cached vs direct paths
// ==============================================

#[test]
fn replayed_query_stream_agrees_with_uncached_path() {
    // Deterministic stream shaped like the intended workload: mostly range
    // queries over a small hot pool, occasional updates.
    let n = 500usize;
    let base: Vec<i64> = (0..n as i64).map(|i| (i * 37 + 11) % 100).collect();
    let hot = [(20usize, 380usize), (0, 499), (100, 150), (250, 450)];

    let mut direct_array = base.clone();
    let mut cached_array = base;
    let mut cache = RangeSumCache::try_new(64).unwrap();

    let mut state = 0x1234_5678u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    for _ in 0..5_000 {
        let roll = next();
        if roll % 100 < 3 {
            let index = (next() % n as u64) as usize;
            let value = (next() % 100) as i64;
            direct_array[index] = value;
            cache.apply_update(&mut cached_array, index, value).unwrap();
        } else {
            let (left, right) = if roll % 100 < 95 {
                hot[(next() % hot.len() as u64) as usize]
            } else {
                let left = (next() % n as u64) as usize;
                let right = left + (next() % (n - left) as u64) as usize;
                (left, right)
            };
            let want = direct_sum(&direct_array, left, right);
            let got = cache.range_sum(&cached_array, left, right).unwrap();
            assert_eq!(got, want, "range [{left}, {right}]");
        }
    }
    assert_eq!(direct_array, cached_array);
}

#[cfg(feature = "metrics")]
#[test]
fn hot_workload_is_hit_dominated() {
    let array = vec![1i64; 1_000];
    let mut cache = RangeSumCache::try_new(100).unwrap();

    for _ in 0..100 {
        for &(l, r) in &[(0usize, 900usize), (50, 60), (200, 700)] {
            cache.range_sum(&array, l, r).unwrap();
        }
    }

    let snap = cache.metrics_snapshot();
    assert_eq!(snap.range_misses, 3);
    assert_eq!(snap.range_calls, 300);
    assert!(snap.hit_rate() > 0.98);
}
