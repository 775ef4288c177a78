//! Cache Entry Module
//!
//! Defines the structure for individual region entries with write-time stamps.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the instant it was written.
///
/// Entries do not carry their own TTL; the owning region's TTL applies to all
/// of its entries.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Write timestamp, reset on every overwrite
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was written.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// An entry is expired once its age is greater than or equal to the TTL.
    /// `None` means the region never expires entries.
    pub fn is_expired(&self, ttl: Option<Duration>) -> bool {
        match ttl {
            Some(ttl) => self.age() >= ttl,
            None => false,
        }
    }
}
