//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
///
/// These never cross the service boundary: callers map any variant to a
/// cache-miss or no-op outcome and carry on against the durable store.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
    Timeout,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
            Self::Timeout => write!(f, "Cache operation timed out"),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short URL mappings.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application: cache unavailability degrades performance,
/// never correctness or availability. The durable store stays authoritative.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a short code from cache.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Production implementations are fail-open and report faults as misses;
    /// callers must still treat an `Err` identically to `Ok(None)`.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a URL mapping in cache with optional TTL.
    ///
    /// Every entry carries a TTL: the expiry is what bounds staleness when a
    /// later invalidation fails, not just a performance tuning choice.
    ///
    /// # Arguments
    ///
    /// - `short_code` - The short code key
    /// - `original_url` - The full URL to cache
    /// - `ttl_seconds` - Optional TTL override (implementation default if None)
    ///
    /// # Errors
    ///
    /// Callers swallow any error; population is advisory only.
    async fn set_url(
        &self,
        short_code: &str,
        original_url: &str,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()>;

    /// Removes a cached URL mapping.
    ///
    /// Used after a record is deactivated, once the durable store has
    /// committed the change.
    ///
    /// # Errors
    ///
    /// Callers swallow any error; the TTL on the stale entry guarantees
    /// eventual consistency even when invalidation fails.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
