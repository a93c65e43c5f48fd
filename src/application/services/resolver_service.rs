//! Redirect resolution service.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use serde_json::json;
use tracing::{debug, warn};

/// Service resolving short codes to original URLs.
///
/// Implements the read side of the cache-aside protocol: consult the cache,
/// fall through to the database on a miss, and repair the cache with the
/// result. Cache faults on either leg are logged and degraded; only database
/// faults propagate, since the database is the correctness authority.
pub struct ResolverService<R: UrlRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: UrlRepository> ResolverService<R> {
    /// Creates a new resolver service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Request Flow
    ///
    /// 1. Cache lookup. An operational cache failure is logged and treated
    ///    exactly like a miss; it never aborts resolution.
    /// 2. On a hit, return the cached URL with no database query. A
    ///    deactivation that raced with population may be served stale until
    ///    the TTL expires; that window is bounded and accepted.
    /// 3. On a miss, query the database for an active record. Concurrent
    ///    misses for the same code may each query and repopulate; the writes
    ///    are value-idempotent so last-write-wins is harmless.
    /// 4. Repopulate the cache with the default TTL. Population is advisory:
    ///    its failure does not change the result already read from the
    ///    database.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        match self.cache.get_url(short_code).await {
            Ok(Some(url)) => {
                debug!(short_code, "Cache HIT");
                return Ok(url);
            }
            Ok(None) => {
                debug!(short_code, "Cache MISS");
            }
            Err(e) => {
                warn!(error = %e, short_code, "Cache lookup failed, falling back to database");
            }
        }

        let record = self
            .repository
            .find_active_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Short link not found",
                    json!({ "short_code": short_code }),
                )
            })?;

        if let Err(e) = self
            .cache
            .set_url(short_code, &record.original_url, None)
            .await
        {
            warn!(error = %e, short_code, "Failed to populate cache");
        }

        Ok(record.original_url)
    }
}
