use crate::domain::model::CacheInfo;
use indexmap::IndexMap;
use std::hash::Hash;

pub const DEFAULT_CACHE_SIZE: usize = 256;

/// Smallest cache that keeps the memoized recursion linear. `compute(n)`
/// needs `n - 1` and `n - 2` resident while it inserts `n`; with fewer slots
/// `n - 2` is evicted before it is read back and the recursion goes
/// exponential.
pub const MIN_FIBONACCI_CACHE_SIZE: usize = 3;

/// Largest input whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INPUT: u32 = 93;

/// Bounded map that evicts the least recently used entry.
///
/// Entries are kept in recency order: the front of the map is the next to be
/// evicted, the back is the most recently touched.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    entries: IndexMap<K, V>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<K: Hash + Eq, V: Clone> LruCache<K, V> {
    /// A zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up `key`, counting a hit or a miss. A hit refreshes recency.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get_index_of(key) {
            Some(index) => {
                self.hits += 1;
                let last = self.entries.len() - 1;
                self.entries.move_index(index, last);
                self.entries.get_index(last).map(|(_, v)| v.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        if let Some(index) = self.entries.get_index_of(&key) {
            let last = self.entries.len() - 1;
            self.entries.move_index(index, last);
            if let Some((_, slot)) = self.entries.get_index_mut(last) {
                *slot = value;
            }
            return;
        }

        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value);
    }

    /// Membership test that leaves statistics and recency untouched.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits,
            misses: self.misses,
            max_size: self.capacity,
            current_size: self.entries.len(),
        }
    }
}

/// Recursive Fibonacci memoized through an [`LruCache`].
#[derive(Debug, Clone)]
pub struct Fibonacci {
    cache: LruCache<u32, u64>,
    evaluations: u64,
}

impl Fibonacci {
    pub fn new(cache_size: usize) -> Self {
        Self {
            cache: LruCache::new(cache_size),
            evaluations: 0,
        }
    }

    /// `n` must not exceed [`MAX_FIBONACCI_INPUT`].
    pub fn compute(&mut self, n: u32) -> u64 {
        if let Some(value) = self.cache.get(&n) {
            return value;
        }

        self.evaluations += 1;
        let value = if n < 2 {
            u64::from(n)
        } else {
            self.compute(n - 1) + self.compute(n - 2)
        };
        self.cache.insert(n, value);
        value
    }

    /// Number of times the recursive body ran, i.e. computations not served
    /// from the cache.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }

    pub fn cache_clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}
