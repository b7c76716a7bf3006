//! Cache Entry Module
//!
//! Defines a memoized fetch result together with its freshness window.

use std::time::Duration;

use tokio::time::Instant;

/// Expiry horizon used when `fetched_at + ttl` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

// == Cache Entry ==
/// A single memoized value with the instant it stops being served.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the fetch that produced this value was started
    pub fetched_at: Instant,
    /// First instant at which the entry is no longer fresh
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry fetched at `fetched_at` that stays fresh for `ttl`.
    ///
    /// A `ttl` too large for the clock (e.g. `Duration::MAX`) saturates to a
    /// far-future expiry.
    pub fn new(value: V, fetched_at: Instant, ttl: Duration) -> Self {
        let expires_at = fetched_at
            .checked_add(ttl)
            .or_else(|| fetched_at.checked_add(FAR_FUTURE))
            .unwrap_or(fetched_at);

        Self {
            value,
            fetched_at,
            expires_at,
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served at `now`.
    ///
    /// Boundary condition: at exactly `expires_at` the entry is already
    /// expired, so a zero TTL never produces a servable entry.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    /// Checks freshness against the current (tokio) clock.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        !self.is_fresh()
    }

    // == Time To Live ==
    /// Returns how long the entry stays fresh, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
