//! Cache Module
//!
//! Read-through memoization of async fetches with per-call TTL.

mod entry;
mod read_through;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use read_through::ReadThroughCache;
pub use stats::CacheStats;
pub use store::CacheStore;
