//! Error types for the catalog cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Error returned by a read-through cache lookup.
///
/// `E` is the error type of the caller's fetch function. A fetch failure is
/// carried through untouched so the caller sees exactly what its fetch
/// produced.
#[derive(Error, Debug)]
pub enum CacheError<E> {
    /// Key rejected before any fetch was attempted
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The wrapped fetch function failed
    #[error("Fetch failed: {0}")]
    Fetch(E),
}

impl<E> CacheError<E> {
    /// Returns the fetch function's own error, if that is what failed.
    pub fn into_fetch_error(self) -> Option<E> {
        match self {
            CacheError::Fetch(err) => Some(err),
            CacheError::InvalidKey(_) => None,
        }
    }

    /// True if the lookup never reached the fetch function.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, CacheError::InvalidKey(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache lookups.
pub type Result<T, E> = std::result::Result<T, CacheError<E>>;
