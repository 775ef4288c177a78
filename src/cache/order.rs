//! Insertion Order Module
//!
//! Tracks the order in which keys were written so overflow evicts the oldest write.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Stale queue slots tolerated before a compaction pass.
const COMPACT_SLACK: usize = 32;

// == Insertion Order ==
/// Tracks write order for oldest-first eviction.
///
/// Every write pushes `(key, seq)` onto a VecDeque where:
/// - Front = Oldest write
/// - Back = Newest write
///
/// Rewrites and removals only update the live sequence map. Queue slots whose
/// sequence no longer matches are skipped when popping, and dropped in bulk
/// once they outnumber the live keys, so every operation is amortized O(1).
///
/// Reads never reorder keys; only writes do.
#[derive(Debug)]
pub struct InsertionOrder<K> {
    queue: VecDeque<(K, u64)>,
    live: HashMap<K, u64>,
    next_seq: u64,
}

impl<K: Eq + Hash + Clone> InsertionOrder<K> {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            live: HashMap::new(),
            next_seq: 0,
        }
    }

    // == Record ==
    /// Marks a key as the newest write.
    ///
    /// An existing key moves to the back, so an overwrite counts as a fresh insert.
    pub fn record(&mut self, key: &K) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.live.insert(key.clone(), seq);
        self.queue.push_back((key.clone(), seq));
        self.compact_if_needed();
    }

    // == Remove ==
    /// Forgets a key. Its queue slot goes stale and is skipped later.
    pub fn remove(&mut self, key: &K) {
        if self.live.remove(key).is_some() {
            self.compact_if_needed();
        }
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest written key.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<K> {
        while let Some((key, seq)) = self.queue.pop_front() {
            if self.live.get(&key) == Some(&seq) {
                self.live.remove(&key);
                return Some(key);
            }
        }
        None
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.live.clear();
    }

    fn compact_if_needed(&mut self) {
        if self.queue.len() > 2 * self.live.len() + COMPACT_SLACK {
            let live = &self.live;
            self.queue.retain(|(key, seq)| live.get(key) == Some(seq));
        }
    }

    #[cfg(test)]
    fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl<K: Eq + Hash + Clone> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_order_new() {
        let mut order: InsertionOrder<String> = InsertionOrder::new();
        assert_eq!(order.pop_oldest(), None);
        assert_eq!(order.queued(), 0);
    }

    #[test]
    fn test_first_write_is_oldest() {
        let mut order = InsertionOrder::new();

        order.record(&key("key1"));
        order.record(&key("key2"));
        order.record(&key("key3"));

        assert_eq!(order.pop_oldest(), Some(key("key1")));
        assert_eq!(order.pop_oldest(), Some(key("key2")));
    }

    #[test]
    fn test_rewrite_moves_key_to_back() {
        let mut order = InsertionOrder::new();

        order.record(&key("a"));
        order.record(&key("b"));
        order.record(&key("c"));
        order.record(&key("a"));

        assert_eq!(order.pop_oldest(), Some(key("b")));
        assert_eq!(order.pop_oldest(), Some(key("c")));
        assert_eq!(order.pop_oldest(), Some(key("a")));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_remove() {
        let mut order = InsertionOrder::new();

        order.record(&key("key1"));
        order.record(&key("key2"));
        order.record(&key("key3"));

        order.remove(&key("key2"));
        order.remove(&key("nonexistent"));

        assert_eq!(order.pop_oldest(), Some(key("key1")));
        assert_eq!(order.pop_oldest(), Some(key("key3")));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_removed_then_rewritten_key_is_newest() {
        let mut order = InsertionOrder::new();

        order.record(&1);
        order.record(&2);
        order.remove(&1);
        order.record(&1);

        assert_eq!(order.pop_oldest(), Some(2));
        assert_eq!(order.pop_oldest(), Some(1));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_record_same_key_multiple_times() {
        let mut order = InsertionOrder::new();

        order.record(&7);
        order.record(&7);
        order.record(&7);

        assert_eq!(order.pop_oldest(), Some(7));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_stale_slots_are_compacted() {
        let mut order = InsertionOrder::new();
        order.record(&0);
        order.record(&1);

        for _ in 0..10_000 {
            order.record(&1);
        }
        for i in 100..1_100 {
            order.record(&i);
            order.remove(&i);
        }

        assert!(order.queued() <= 2 * 2 + COMPACT_SLACK + 1);
        assert_eq!(order.pop_oldest(), Some(0));
        assert_eq!(order.pop_oldest(), Some(1));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_clear() {
        let mut order = InsertionOrder::new();
        order.record(&1);
        order.record(&2);

        order.clear();

        assert_eq!(order.pop_oldest(), None);
        assert_eq!(order.queued(), 0);
    }
}
