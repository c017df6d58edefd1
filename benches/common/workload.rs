//! Query-stream generators for the range-sum benchmarks.
//!
//! Provides deterministic operation streams without pulling in external RNG
//! crates. The default spec models the intended workload: range queries
//! heavily skewed toward a small hot pool of ranges, with rare point updates.

/// One operation against the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Sum over the inclusive range `[left, right]`.
    Range { left: usize, right: usize },
    /// Write `value` at `index`.
    Update { index: usize, value: i64 },
}

/// Parameters of a query stream.
#[derive(Debug, Clone, Copy)]
pub struct QueryStreamSpec {
    /// Length of the backing array.
    pub array_len: usize,
    /// Number of distinct hot ranges.
    pub hot_pool: usize,
    /// Probability a range query draws from the hot pool.
    pub hot_prob: f64,
    /// Probability an operation is an update.
    pub update_prob: f64,
    pub seed: u64,
}

impl Default for QueryStreamSpec {
    fn default() -> Self {
        Self {
            array_len: 10_000,
            hot_pool: 30,
            hot_prob: 0.95,
            update_prob: 0.03,
            seed: 0x5eed_cafe,
        }
    }
}

/// Deterministic stream of [`Query`] operations.
#[derive(Debug, Clone)]
pub struct QueryStream {
    spec: QueryStreamSpec,
    rng: XorShift64,
    hot: Vec<(usize, usize)>,
}

impl QueryStream {
    pub fn new(spec: QueryStreamSpec) -> Self {
        let mut rng = XorShift64::new(spec.seed);
        let n = spec.array_len.max(2);
        // Hot ranges straddle the middle so they stay wide.
        let hot = (0..spec.hot_pool.max(1))
            .map(|_| {
                let left = rng.next_below(n / 2);
                let right = n / 2 + rng.next_below(n - n / 2);
                (left, right)
            })
            .collect();
        Self { spec, rng, hot }
    }

    pub fn next_query(&mut self) -> Query {
        let n = self.spec.array_len.max(2);
        if self.rng.next_f64() < self.spec.update_prob {
            Query::Update {
                index: self.rng.next_below(n),
                value: 1 + self.rng.next_below(100) as i64,
            }
        } else if self.rng.next_f64() < self.spec.hot_prob {
            let (left, right) = self.hot[self.rng.next_below(self.hot.len())];
            Query::Range { left, right }
        } else {
            let left = self.rng.next_below(n);
            let right = left + self.rng.next_below(n - left);
            Query::Range { left, right }
        }
    }

    pub fn take(&mut self, count: usize) -> Vec<Query> {
        (0..count).map(|_| self.next_query()).collect()
    }
}

/// Deterministic array contents, values in `1..=100` like the query values.
pub fn seed_array(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = XorShift64::new(seed);
    (0..len).map(|_| 1 + rng.next_below(100) as i64).collect()
}

/// xorshift64* generator; deterministic and dependency-free.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn next_below(&mut self, n: usize) -> usize {
        (self.next_u64() % n.max(1) as u64) as usize
    }
}
