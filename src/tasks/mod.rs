//! Background Tasks Module
//!
//! Periodic maintenance that runs alongside a cache on the tokio runtime.
//!
//! # Tasks
//! - Expiry sweep: drops entries whose TTL has elapsed

mod sweep;

pub use sweep::spawn_sweep_task;
