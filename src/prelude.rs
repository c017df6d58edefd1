pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, OutOfBoundsError};
pub use crate::policy::lru::LruCache;
pub use crate::range_sum::{RangeKey, RangeSumCache};
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::range_sum::SharedRangeSum;
#[cfg(feature = "metrics")]
pub use crate::metrics::{LruMetricsSnapshot, MetricsSnapshotProvider, RangeSumMetricsSnapshot};
