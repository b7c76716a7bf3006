//! Cache Store Module
//!
//! Synchronous key → entry map underneath the read-through cache.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Unbounded map of memoized values, one entry per key.
///
/// The store never runs a fetch itself. `ReadThroughCache` drives it and
/// owns the locking; the store only answers freshness questions and records
/// outcomes.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Validate Key ==
    /// Checks a caller-supplied key.
    ///
    /// Keys carry their fetch parameters, so any non-empty string is
    /// accepted whatever its length. Returns an error message for an empty
    /// key, None if valid.
    pub fn validate_key(key: &str) -> Option<String> {
        if key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }

        None
    }

    // == Insert ==
    /// Stores `value` for `key`, fetched at `fetched_at` and fresh for `ttl`.
    ///
    /// Any previous entry for the key is replaced wholesale.
    pub fn insert(&mut self, key: String, value: V, fetched_at: Instant, ttl: Duration) {
        self.entries
            .insert(key, CacheEntry::new(value, fetched_at, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Is Fresh ==
    /// True iff `key` has an entry that has not expired.
    ///
    /// Pure query: neither the entry nor the statistics change.
    pub fn is_fresh(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(CacheEntry::is_fresh)
            .unwrap_or(false)
    }

    /// Returns the entry for `key` regardless of freshness.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Removes the entry for `key`, returning whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Drops every entry, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        count
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh_at(now));

        let count = before - self.entries.len();
        self.stats.record_purged(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    pub fn record_fetch_failure(&mut self) {
        self.stats.record_fetch_failure();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get Fresh ==
    /// Returns a copy of the value for `key` if its entry is still fresh.
    ///
    /// Counts a hit or a miss. Expired entries are left in place; the next
    /// successful fetch overwrites them and sweeps remove the rest.
    pub fn get_fresh(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh() => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }
}
