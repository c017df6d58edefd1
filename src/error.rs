//! Error types for the rangecache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (zero capacity).
//! - [`OutOfBoundsError`]: Returned when a range or update index falls outside
//!   the backing slice, or a range is inverted. Never silently clamped.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug/test-only `check_invariants` methods).
//!
//! A cache miss is *not* an error: it is `Option::None` on the lookup path.
//!
//! ## Example Usage
//!
//! ```
//! use rangecache::error::ConfigError;
//! use rangecache::policy::lru::LruCache;
//!
//! let cache: Result<LruCache<u64, i64>, ConfigError> = LruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<u64, i64>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruCache::try_new`](crate::policy::lru::LruCache::try_new) and
/// [`RangeSumCache::try_new`](crate::range_sum::RangeSumCache::try_new).
/// Carries a human-readable description of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// OutOfBoundsError
// ---------------------------------------------------------------------------

/// Error returned when a range query or point update names positions outside
/// the backing slice.
///
/// Returned by [`RangeSumCache::range_sum`](crate::range_sum::RangeSumCache::range_sum)
/// and [`RangeSumCache::apply_update`](crate::range_sum::RangeSumCache::apply_update).
/// Out-of-range inputs are a caller contract violation and are reported
/// exactly; they are never clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBoundsError {
    /// `index` is not within `[0, len)`.
    Index { index: usize, len: usize },
    /// `right` is not within `[0, len)` (and therefore the range is invalid).
    Range {
        left: usize,
        right: usize,
        len: usize,
    },
    /// `left > right`: the range is inverted rather than out of range.
    Inverted { left: usize, right: usize },
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OutOfBoundsError::Index { index, len } => {
                write!(f, "update index {index} out of bounds for slice of length {len}")
            },
            OutOfBoundsError::Range { left, right, len } => {
                write!(
                    f,
                    "range [{left}, {right}] out of bounds for slice of length {len}"
                )
            },
            OutOfBoundsError::Inverted { left, right } => {
                write!(f, "inverted range: left {left} > right {right}")
            },
        }
    }
}

impl std::error::Error for OutOfBoundsError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by debug-only `check_invariants` methods
/// (e.g. [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
