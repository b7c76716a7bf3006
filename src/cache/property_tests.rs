//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the freshness, invalidation and failure rules of
//! the read-through cache over generated keys, TTLs and elapsed times.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tokio::time::Instant;

use crate::cache::{CacheStore, ReadThroughCache};

// == Test Configuration ==
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Current-thread runtime with a paused clock, so `advance` is exact.
fn paused_runtime() -> Runtime {
    Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

// == Strategies ==
/// Generates valid (non-empty) cache keys
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,64}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

/// A TTL in milliseconds plus an offset strictly inside it.
fn ttl_and_inside_strategy() -> impl Strategy<Value = (u64, u64)> {
    (1u64..100_000).prop_flat_map(|ttl| (Just(ttl), 0..ttl))
}

/// A TTL in milliseconds plus an offset at or past it.
fn ttl_and_past_strategy() -> impl Strategy<Value = (u64, u64)> {
    (0u64..100_000).prop_flat_map(|ttl| (Just(ttl), ttl..ttl + 100_000))
}

#[derive(Debug, Clone)]
enum StoreOp {
    Insert { key: String, value: String },
    Get { key: String },
    Remove { key: String },
    IsFresh { key: String },
}

/// Small key space so operations collide often
fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    let key = "[a-d]";
    prop_oneof![
        (key, value_strategy()).prop_map(|(key, value)| StoreOp::Insert { key, value }),
        key.prop_map(|key| StoreOp::Get { key }),
        key.prop_map(|key| StoreOp::Remove { key }),
        key.prop_map(|key| StoreOp::IsFresh { key }),
    ]
}

/// Runs one lookup whose fetch yields `value`, returning what the cache
/// answered and whether the fetch ran.
async fn lookup(cache: &ReadThroughCache<String>, key: &str, value: &str, ttl: Duration) -> (String, bool) {
    let ran = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ran);
    let value = value.to_string();
    let got = cache
        .get_cached_data(
            key,
            move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>(value)
            },
            ttl,
        )
        .await
        .unwrap();
    (got, ran.load(Ordering::SeqCst) == 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Freshness bound: inside the TTL the original value comes back and the
    // new fetch is never invoked.
    #[test]
    fn prop_fresh_entry_is_served(
        key in valid_key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
        (ttl_ms, elapsed_ms) in ttl_and_inside_strategy()
    ) {
        let rt = paused_runtime();
        let ttl = Duration::from_millis(ttl_ms);

        let (got, fetched) = rt.block_on(async {
            let cache = ReadThroughCache::new(TEST_DEFAULT_TTL);
            lookup(&cache, &key, &first, ttl).await;
            tokio::time::advance(Duration::from_millis(elapsed_ms)).await;
            lookup(&cache, &key, &second, ttl).await
        });

        prop_assert_eq!(got, first);
        prop_assert!(!fetched, "Fresh entry should not refetch");
    }

    // Expiry: at or after the TTL the new fetch runs and its value wins.
    #[test]
    fn prop_expired_entry_is_refetched(
        key in valid_key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
        (ttl_ms, elapsed_ms) in ttl_and_past_strategy()
    ) {
        let rt = paused_runtime();
        let ttl = Duration::from_millis(ttl_ms);

        let (got, fetched) = rt.block_on(async {
            let cache = ReadThroughCache::new(TEST_DEFAULT_TTL);
            lookup(&cache, &key, &first, ttl).await;
            tokio::time::advance(Duration::from_millis(elapsed_ms)).await;
            lookup(&cache, &key, &second, ttl).await
        });

        prop_assert_eq!(got, second);
        prop_assert!(fetched, "Expired entry should refetch");
    }

    // A failed fetch never leaves anything that blocks the retry.
    #[test]
    fn prop_failure_does_not_poison(key in valid_key_strategy(), value in value_strategy()) {
        let rt = paused_runtime();

        let (failed, (got, fetched)) = rt.block_on(async {
            let cache: ReadThroughCache<String> = ReadThroughCache::new(TEST_DEFAULT_TTL);
            let failed = cache
                .get_cached_data(&key, || async { Err::<String, _>("offline") }, TEST_DEFAULT_TTL)
                .await
                .is_err();
            (failed, lookup(&cache, &key, &value, TEST_DEFAULT_TTL).await)
        });

        prop_assert!(failed);
        prop_assert!(fetched, "Retry after failure should fetch");
        prop_assert_eq!(got, value);
    }

    // clear_cache invalidates exactly the named key.
    #[test]
    fn prop_clear_cache_is_per_key(a in valid_key_strategy(), b in valid_key_strategy()) {
        prop_assume!(a != b);
        let rt = paused_runtime();

        let (a_fetched, b_fetched) = rt.block_on(async {
            let cache = ReadThroughCache::new(TEST_DEFAULT_TTL);
            lookup(&cache, &a, "a1", TEST_DEFAULT_TTL).await;
            lookup(&cache, &b, "b1", TEST_DEFAULT_TTL).await;
            cache.clear_cache(&a).await;
            let (_, a_fetched) = lookup(&cache, &a, "a2", TEST_DEFAULT_TTL).await;
            let (_, b_fetched) = lookup(&cache, &b, "b2", TEST_DEFAULT_TTL).await;
            (a_fetched, b_fetched)
        });

        prop_assert!(a_fetched, "Cleared key should miss");
        prop_assert!(!b_fetched, "Other key should still hit");
    }

    // is_cached never changes the outcome of the next lookup.
    #[test]
    fn prop_is_cached_is_non_mutating(
        key in valid_key_strategy(),
        checks in 0usize..20,
        (ttl_ms, elapsed_ms) in (1u64..10_000).prop_flat_map(|ttl| (Just(ttl), 0..ttl * 2))
    ) {
        let rt = paused_runtime();
        let ttl = Duration::from_millis(ttl_ms);

        let (reported, fetched) = rt.block_on(async {
            let cache = ReadThroughCache::new(TEST_DEFAULT_TTL);
            lookup(&cache, &key, "v1", ttl).await;
            tokio::time::advance(Duration::from_millis(elapsed_ms)).await;
            let mut reported = cache.is_cached(&key).await;
            for _ in 0..checks {
                reported = cache.is_cached(&key).await;
            }
            let (_, fetched) = lookup(&cache, &key, "v2", ttl).await;
            (reported, fetched)
        });

        prop_assert_eq!(reported, elapsed_ms < ttl_ms);
        prop_assert_eq!(fetched, !reported);
    }

    // Statistics count exactly the lookups that hit and missed, and
    // freshness checks are not lookups. Checked against a plain map model.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                StoreOp::Insert { key, value } => {
                    model.insert(key.clone(), value.clone());
                    store.insert(key, value, Instant::now(), TEST_DEFAULT_TTL);
                }
                StoreOp::Get { key } => {
                    let expected = model.get(&key).cloned();
                    match expected {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    prop_assert_eq!(store.get_fresh(&key), expected);
                }
                StoreOp::Remove { key } => {
                    prop_assert_eq!(store.remove(&key), model.remove(&key).is_some());
                }
                StoreOp::IsFresh { key } => {
                    prop_assert_eq!(store.is_fresh(&key), model.contains_key(&key));
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
        prop_assert_eq!(store.len(), model.len());
    }
}
