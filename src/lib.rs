//! Event Catalog - caching and filtering core for a trade-show client
//!
//! Provides a read-through TTL cache for API fetches and a faceted filter
//! for the exhibitor, sponsor, partner, speaker and schedule lists.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod tasks;

pub use cache::{CacheStats, ReadThroughCache};
pub use config::CacheConfig;
pub use error::CacheError;
pub use filter::{extract_facet_values, filter_records, matches, FacetSelection};
pub use tasks::spawn_sweep_task;
