//! Read-Through Cache Module
//!
//! Memoizes async fetches under caller-chosen keys for a bounded time.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Read-Through Cache ==
/// Cloneable handle to a shared store of memoized fetch results.
///
/// Keys name the logical resource being fetched and must include any
/// parameters of the fetch (e.g. `"meetings_2026-04-20"`); the cache never
/// looks inside `fetch_fn`.
///
/// There is no single-flight guarantee. Two lookups that miss on the same key
/// before either fetch completes both run their fetch, and whichever
/// finishes last owns the entry.
#[derive(Debug)]
pub struct ReadThroughCache<V> {
    /// Shared store; never locked across a fetch
    store: Arc<RwLock<CacheStore<V>>>,
    /// TTL used by `get_or_fetch`
    default_ttl: Duration,
}

impl<V> Clone for ReadThroughCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            default_ttl: self.default_ttl,
        }
    }
}

impl<V> Default for ReadThroughCache<V> {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

impl<V> ReadThroughCache<V> {
    /// Creates an empty cache whose `get_or_fetch` uses `default_ttl`.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new())),
            default_ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl())
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Shared store, for the expiry sweeper.
    pub fn store(&self) -> Arc<RwLock<CacheStore<V>>> {
        Arc::clone(&self.store)
    }

    // == Clear Cache ==
    /// Forces the next lookup of `key` to fetch. No-op if nothing is cached.
    pub async fn clear_cache(&self, key: &str) {
        let removed = self.store.write().await.remove(key);
        if removed {
            debug!(key, "cache entry cleared");
        }
    }

    // == Clear All Cache ==
    /// Empties the store, e.g. at a session reset.
    pub async fn clear_all_cache(&self) {
        let count = self.store.write().await.clear();
        info!(count, "cache cleared");
    }

    // == Is Cached ==
    /// True iff `key` currently has a fresh entry.
    ///
    /// Does not count as a lookup and does not extend the entry's lifetime.
    pub async fn is_cached(&self, key: &str) -> bool {
        self.store.read().await.is_fresh(key)
    }

    // == Purge Expired ==
    /// Drops expired entries, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.purge_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl<V: Clone> ReadThroughCache<V> {
    // == Get Cached Data ==
    /// Returns the fresh value for `key`, or runs `fetch_fn` and caches its result.
    ///
    /// On a miss the value is stored with an expiry of `ttl` counted from the
    /// moment `fetch_fn` was started. A zero `ttl` stores an entry that is
    /// already expired.
    ///
    /// If `fetch_fn` fails, the store is left exactly as it was and the error
    /// comes back as `CacheError::Fetch`.
    pub async fn get_cached_data<F, Fut, E>(&self, key: &str, fetch_fn: F, ttl: Duration) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        if let Some(error_msg) = CacheStore::<V>::validate_key(key) {
            return Err(CacheError::InvalidKey(error_msg));
        }

        // Write lock: a lookup updates hit/miss counters
        let cached = self.store.write().await.get_fresh(key);
        if let Some(value) = cached {
            debug!(key, "cache hit");
            return Ok(value);
        }

        debug!(key, ttl_ms = ttl.as_millis() as u64, "cache miss, fetching");
        let started = Instant::now();

        match fetch_fn().await {
            Ok(value) => {
                self.store
                    .write()
                    .await
                    .insert(key.to_string(), value.clone(), started, ttl);
                Ok(value)
            }
            Err(err) => {
                warn!(key, "fetch failed, cache left untouched");
                self.store.write().await.record_fetch_failure();
                Err(CacheError::Fetch(err))
            }
        }
    }

    /// `get_cached_data` with the cache's default TTL.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch_fn: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<V, E>>,
    {
        self.get_cached_data(key, fetch_fn, self.default_ttl).await
    }
}
