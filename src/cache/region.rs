//! Cache Region Module
//!
//! A single named store bounded by entry count and write-time TTL.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};
use crate::error::ConfigurationError;

// == Region State ==
/// Mutable contents of a region, guarded by the region lock.
#[derive(Debug)]
struct RegionState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    order: InsertionOrder<K>,
    stats: CacheStats,
}

impl<K, V> RegionState<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }

    fn purge_expired(&mut self, ttl: Option<Duration>) -> usize {
        if ttl.is_none() {
            return 0;
        }

        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(ttl))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }
}

// == Cache Region ==
/// Named key-value store with a fixed capacity and TTL.
///
/// All operations take the region lock for their whole duration, so each call
/// is atomic on its own. Sequences of calls are not: a `get` followed by a
/// `put` may interleave with other threads.
///
/// Overflow evicts the oldest write first. Reads never change eviction order.
#[derive(Debug)]
pub struct CacheRegion<K, V> {
    name: String,
    max_entries: usize,
    /// `None` when the region was configured with a zero TTL
    ttl: Option<Duration>,
    state: Mutex<RegionState<K, V>>,
}

impl<K, V> CacheRegion<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty region.
    ///
    /// A zero `ttl` disables expiry. `max_entries` must be at least one.
    pub fn new(
        name: impl Into<String>,
        max_entries: usize,
        ttl: Duration,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if max_entries == 0 {
            return Err(ConfigurationError::InvalidCapacity(name));
        }

        Ok(Self {
            name,
            max_entries,
            ttl: (!ttl.is_zero()).then_some(ttl),
            state: Mutex::new(RegionState {
                entries: HashMap::new(),
                order: InsertionOrder::new(),
                stats: CacheStats::new(),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Configured TTL, or None if entries never expire.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired.
    ///
    /// An expired entry found here is removed on the spot.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let expired = match state.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                state.stats.record_hit();
                debug!("Cache entry for key {:?} found in region '{}'", key, self.name);
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            state.remove(key);
            state.stats.record_expirations(1);
            debug!("Cache entry for key {:?} expired in region '{}'", key, self.name);
        } else {
            debug!("No cache entry for key {:?} in region '{}'", key, self.name);
        }

        state.stats.record_miss();
        None
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamping it with the current time.
    ///
    /// When a new key would overflow the region, expired entries are purged
    /// first; if the region is still full, the oldest write is evicted.
    pub fn put(&self, key: K, value: V) {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if !state.entries.contains_key(&key) && state.entries.len() >= self.max_entries {
            state.purge_expired(self.ttl);

            if state.entries.len() >= self.max_entries {
                if let Some(oldest) = state.order.pop_oldest() {
                    state.entries.remove(&oldest);
                    state.stats.record_eviction();
                    debug!("Evicted oldest key {:?} from region '{}'", oldest, self.name);
                }
            }
        }

        state.order.record(&key);
        state.entries.insert(key, CacheEntry::new(value));
    }

    // == Evict ==
    /// Removes the entry for `key`. Absent keys are ignored.
    pub fn evict(&self, key: &K) {
        if self.state.lock().remove(key) {
            debug!("Invalidated key {:?} in region '{}'", key, self.name);
        }
    }

    // == Clear ==
    /// Removes every entry in the region.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
        debug!("Cleared region '{}'", self.name);
    }

    // == Read-through ==
    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs at most once per call and never on a hit. Its error is
    /// returned unchanged and nothing is stored. The region lock is not held
    /// while computing, so concurrent misses on the same key each compute and
    /// the last write wins.
    pub fn get_or_compute<F, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = compute()?;
        self.put(key, value.clone());
        Ok(value)
    }

    /// Infallible form of [`CacheRegion::get_or_compute`].
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_compute(key, || Ok::<V, Infallible>(compute())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    // == Purge Expired ==
    /// Physically removes all expired entries, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.state.lock().purge_expired(self.ttl)
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the region counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.entries.len());
        stats
    }
}
