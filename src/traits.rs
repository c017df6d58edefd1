//! # Cache Trait Hierarchy
//!
//! Unified interface for cache implementations, split so that each trait only
//! carries operations that make sense for the policy implementing it.
//!
//! ```text
//!   ┌─────────────────────────────────┐
//!   │        CoreCache<K, V>          │
//!   │  insert / get / contains / len  │
//!   │  is_empty / capacity / clear    │
//!   └───────────────┬─────────────────┘
//!                   │
//!                   ▼
//!   ┌─────────────────────────────────┐
//!   │       MutableCache<K, V>        │
//!   │  remove / remove_batch          │
//!   └───────────────┬─────────────────┘
//!                   │
//!                   ▼
//!   ┌─────────────────────────────────┐
//!   │      LruCacheTrait<K, V>        │
//!   │  pop_lru / peek_lru / touch     │
//!   └─────────────────────────────────┘
//! ```
//!
//! | Trait           | Extends        | Purpose                            |
//! |-----------------|----------------|------------------------------------|
//! | `CoreCache`     | -              | Universal cache operations         |
//! | `MutableCache`  | `CoreCache`    | Arbitrary key-based removal        |
//! | `LruCacheTrait` | `MutableCache` | Recency-ordered eviction surface   |
//!
//! `MutableCache::remove` is what invalidation layers build on: the
//! range-sum adapter scans held keys and removes exactly the stale ones.

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use rangecache::policy::lru::LruCache;
/// use rangecache::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, i64>>(cache: &mut C, data: &[(u64, i64)]) {
///     for &(key, value) in data {
///         cache.insert(key, value);
///     }
/// }
///
/// let mut cache = LruCache::try_new(100).unwrap();
/// warm_cache(&mut cache, &[(1, 10), (2, 20)]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// existed. At capacity, a new key evicts according to the cache's policy.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key. May update internal access state
    /// (for LRU: promotes the entry to most-recently-used).
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use rangecache::policy::lru::LruCache;
/// use rangecache::traits::{CoreCache, MutableCache};
///
/// fn invalidate_keys<C: MutableCache<u64, i64>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::try_new(100).unwrap();
/// cache.insert(1, 10);
/// cache.insert(2, 20);
/// invalidate_keys(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair, returning the value if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning removed values in input order.
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LRU-specific operations that respect access order.
///
/// # Example
///
/// ```
/// use rangecache::policy::lru::LruCache;
/// use rangecache::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache = LruCache::try_new(3).unwrap();
/// cache.insert(1, "first");
/// cache.insert(2, "second");
///
/// // Access key 1 to make it MRU; key 2 is now LRU.
/// cache.get(&1);
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// let (key, _) = cache.pop_lru().unwrap();
/// assert_eq!(key, 2);
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the LRU entry without removing it or updating access order.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as recently used without retrieving the value.
    /// Returns `true` if the key was found.
    fn touch(&mut self, key: &K) -> bool;
}
