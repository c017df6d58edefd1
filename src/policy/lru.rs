//! # Least Recently Used (LRU) cache
//!
//! Fixed-capacity cache with strict LRU eviction, built from a hash index and
//! an arena-backed recency list. Both halves must stay consistent: every key
//! in the index names exactly one live list node and vice versa.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V>                       │
//!   │                                                            │
//!   │   FxHashMap<K, SlotId>          IntrusiveList<(K, V)>      │
//!   │   ┌─────────┬────────┐                                     │
//!   │   │   key   │ SlotId │    head ─► [n1] ◄──► [n2] ◄── tail  │
//!   │   ├─────────┼────────┤           (MRU)          (LRU)      │
//!   │   │   k_1   │  n1 ───┼──────────►  │                       │
//!   │   │   k_2   │  n2 ───┼─────────────┼────────►  │           │
//!   │   └─────────┴────────┘                                     │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split is what buys O(1) for every operation: the index answers "which
//! node holds this key" without scanning, and the list relinks in place
//! without searching. A design that scans either structure breaks the
//! performance contract.
//!
//! ## Operations
//!
//! | Method                | Complexity | Description                            |
//! |-----------------------|------------|----------------------------------------|
//! | `try_new(capacity)`   | O(1)       | Fails on zero capacity                 |
//! | `insert(k, v)`        | O(1)       | Insert or overwrite, may evict LRU     |
//! | `insert_and_report`   | O(1)       | Same, also reports the evicted pair    |
//! | `get(&k)`             | O(1)       | Lookup, promotes entry to MRU          |
//! | `peek(&k)`            | O(1)       | Lookup without touching recency order  |
//! | `remove(&k)`          | O(1)       | Unlink + index removal                 |
//! | `keys()`              | O(n) iter  | Held keys, order unspecified           |
//! | `pop_lru` / `peek_lru`| O(1)       | Tail access                            |
//! | `touch(&k)`           | O(1)       | Promote without retrieving             |
//!
//! ## Recency semantics
//!
//! Every successful `get`, `touch`, or overwriting `insert` relocates the
//! entry to the MRU position; that relocation is the mechanism by which
//! recency is tracked. A miss has no structural effect. Overflow on insert
//! evicts exactly one entry, the current tail.
//!
//! The list nodes live in a `SlotArena` and are linked by `SlotId`, so the
//! whole cache is safe Rust with no raw pointers, and `Clone` works when
//! `K: Clone + V: Clone`.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::{LruMetrics, LruMetricsSnapshot, MetricsSnapshotProvider};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Fixed-capacity LRU cache with O(1) get, insert, remove, and eviction.
///
/// Keys are `Copy` (cheap to hold in both index and list node); values are
/// owned by the cache and returned by reference on lookup, by value on
/// removal or eviction.
///
/// # Example
///
/// ```
/// use rangecache::policy::lru::LruCache;
///
/// let mut cache = LruCache::try_new(2).unwrap();
/// cache.insert('a', 1);
/// cache.insert('b', 2);
///
/// // Touch 'a' so 'b' becomes least recently used.
/// cache.get(&'a');
/// cache.insert('c', 3);
///
/// assert!(cache.contains(&'a'));
/// assert!(!cache.contains(&'b'));
/// assert!(cache.contains(&'c'));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    index: FxHashMap<K, SlotId>,
    /// Recency order, front = MRU, back = LRU. Nodes hold `(key, value)`;
    /// the key is needed to update the index on eviction.
    order: IntrusiveList<(K, V)>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Returns [`ConfigError`] if `capacity` is zero; a cache that can hold
    /// nothing is a configuration mistake, not a degenerate mode.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("LruCache capacity must be at least 1"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is held, without updating recency order.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up `key`, promoting the entry to MRU on a hit.
    ///
    /// A miss returns `None` and leaves the cache untouched. Absence is a
    /// normal outcome, never an error and never a sentinel value.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);
        self.order.get(id).map(|(_, v)| v)
    }

    /// Looks up `key` without changing recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.order.get(id).map(|(_, v)| v)
    }

    /// Inserts or overwrites; returns the previous value on overwrite.
    ///
    /// Overwriting promotes the entry to MRU and never evicts. A new key at
    /// capacity evicts exactly one entry, the current LRU tail.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_and_report(key, value).0
    }

    /// [`insert`](Self::insert) that also reports the pair evicted to make
    /// room, if any.
    pub fn insert_and_report(&mut self, key: K, value: V) -> (Option<V>, Option<(K, V)>) {
        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let old = self
                .order
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.1, value));
            self.order.move_to_front(id);
            return (old, None);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let evicted = if self.index.len() == self.capacity {
            let evicted = self.pop_lru();
            #[cfg(feature = "metrics")]
            if evicted.is_some() {
                self.metrics.record_evicted_entry();
            }
            evicted
        } else {
            None
        };

        let id = self.order.push_front((key, value));
        self.index.insert(key, id);
        (None, evicted)
    }

    /// Removes `key`, unlinking its node and dropping it from the index.
    ///
    /// Returns the removed value if the key was present. This is the
    /// invalidation entry point; normal lookup traffic never calls it.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key);
        #[cfg(feature = "metrics")]
        self.metrics.record_remove(id.is_some());
        let (_, value) = self.order.remove(id?)?;
        Some(value)
    }

    /// Iterates over held keys. Order is unspecified; callers must not read
    /// recency out of this iterator.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.index.keys()
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let id = self.order.back_id()?;
        let (key, value) = self.order.remove(id)?;
        self.index.remove(&key);
        Some((key, value))
    }

    /// Peeks at the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let id = self.order.back_id()?;
        self.order.get(id).map(|(k, v)| (k, v))
    }

    /// Promotes `key` to MRU without retrieving its value.
    pub fn touch(&mut self, key: &K) -> bool {
        let found = match self.index.get(key) {
            Some(&id) => self.order.move_to_front(id),
            None => false,
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_touch(found);
        found
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    /// Verifies the index/list consistency invariants.
    ///
    /// - index and list hold the same number of entries, at most `capacity`;
    /// - walking the list from MRU to LRU visits every indexed key exactly
    ///   once, and each node is the one its key maps to.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.order.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "list has {} nodes but index has {} keys",
                self.order.len(),
                self.index.len()
            )));
        }
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.index.len(),
                self.capacity
            )));
        }

        let mut visited = 0usize;
        for id in self.order.iter_ids() {
            let Some((key, _)) = self.order.get(id) else {
                return Err(InvariantError::new("list id points at a freed slot"));
            };
            if self.index.get(key) != Some(&id) {
                return Err(InvariantError::new(
                    "list node key does not map back to its own node",
                ));
            }
            visited += 1;
        }
        if visited != self.index.len() {
            return Err(InvariantError::new(format!(
                "list traversal visited {} nodes, index holds {}",
                visited,
                self.index.len()
            )));
        }
        Ok(())
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Captures the current counters plus size gauges.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_new: self.metrics.insert_new,
            insert_updates: self.metrics.insert_updates,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}
