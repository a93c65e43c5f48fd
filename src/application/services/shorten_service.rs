//! URL shortening and deactivation service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::{debug, warn};

/// Attempts before giving up on finding a collision-free code.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and deactivating short URLs.
///
/// Implements the write side of the cache-aside protocol. The database is
/// always committed first; cache invalidation is a best-effort follow-up
/// whose failure only extends staleness up to the entry's TTL.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Creates a short URL record for the given original URL.
    ///
    /// # Code Assignment
    ///
    /// Draws a random 8-character code and inserts the full record in one
    /// atomic statement. The database uniqueness constraint is the arbiter:
    /// a collision surfaces as a conflict, the code is re-drawn, and the
    /// insert retried. Two racing creates can therefore never commit the
    /// same code, even when they draw the same candidate.
    ///
    /// Creation does not touch the cache; reads populate it on first lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL fails syntax validation
    /// (checked before any database interaction, so there are no side
    /// effects).
    /// Returns [`AppError::Internal`] after [`MAX_ATTEMPTS`] collisions or
    /// on database errors.
    pub async fn create(&self, url_to_shorten: &str) -> Result<ShortUrl, AppError> {
        let normalized_url = normalize_url(url_to_shorten).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for _ in 0..MAX_ATTEMPTS {
            let new_url = NewShortUrl {
                short_code: generate_code(),
                original_url: normalized_url.clone(),
            };

            match self.repository.create(new_url).await {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => {
                    debug!("Short code collision, drawing a new code");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Deactivates a short URL.
    ///
    /// # Ordering
    ///
    /// The database commits the deactivation first, then the cache entry is
    /// removed best-effort. The store must never lag the cache's view of a
    /// deactivation; the reverse (a briefly stale cache entry) is bounded by
    /// the TTL applied on every cache write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active record matches the code
    /// (including records already deactivated).
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn deactivate(&self, short_code: &str) -> Result<(), AppError> {
        let deactivated = self.repository.deactivate(short_code).await?;

        if !deactivated {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "short_code": short_code }),
            ));
        }

        if let Err(e) = self.cache.invalidate(short_code).await {
            warn!(error = %e, short_code, "Failed to invalidate cache after deactivation");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortUrl;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::cache::{CacheError, MockCacheService, NullCache};
    use chrono::Utc;

    fn created_record(new_url: &NewShortUrl) -> ShortUrl {
        ShortUrl::new(
            10,
            new_url.short_code.clone(),
            new_url.original_url.clone(),
            true,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_url| Ok(created_record(&new_url)));

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let record = service.create("https://example.com/a").await.unwrap();
        assert_eq!(record.original_url, "https://example.com/a");
        assert_eq!(record.short_code.len(), 8);
        assert!(record.is_active);
    }

    #[tokio::test]
    async fn test_create_normalizes_url() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_url| new_url.original_url == "https://example.com/path")
            .times(1)
            .returning(|new_url| Ok(created_record(&new_url)));

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let result = service.create("https://EXAMPLE.COM:443/path").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_invalid_url_no_side_effects() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_create().times(0);

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let result = service.create("not-a-url").await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_retries_on_collision() {
        let mut mock_repo = MockUrlRepository::new();
        let mut attempts = 0;
        mock_repo.expect_create().times(2).returning(move |new_url| {
            attempts += 1;
            if attempts == 1 {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": "urls_short_code_key" }),
                ))
            } else {
                Ok(created_record(&new_url))
            }
        });

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let record = service.create("https://example.com").await.unwrap();
        assert_eq!(record.short_code.len(), 8);
    }

    #[tokio::test]
    async fn test_create_gives_up_after_max_attempts() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_create().times(10).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_code_key" }),
            ))
        });

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let result = service.create("https://example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_database_error_propagates() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let result = service.create("https://example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_deactivate_commits_store_then_invalidates_cache() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_deactivate()
            .withf(|code| code == "gone1234")
            .times(1)
            .returning(|_| Ok(true));

        let mut mock_cache = MockCacheService::new();
        mock_cache
            .expect_invalidate()
            .withf(|code| code == "gone1234")
            .times(1)
            .returning(|_| Ok(()));

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(mock_cache));

        assert!(service.deactivate("gone1234").await.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_unknown_code_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_deactivate()
            .times(1)
            .returning(|_| Ok(false));

        let mut mock_cache = MockCacheService::new();
        // No invalidation when nothing was deactivated.
        mock_cache.expect_invalidate().times(0);

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(mock_cache));

        let result = service.deactivate("unknown1").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_deactivate_invalidation_failure_swallowed() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_deactivate()
            .times(1)
            .returning(|_| Ok(true));

        let mut mock_cache = MockCacheService::new();
        mock_cache
            .expect_invalidate()
            .times(1)
            .returning(|_| Err(CacheError::ConnectionError("refused".to_string())));

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(mock_cache));

        // The store committed, so deactivation still succeeds.
        assert!(service.deactivate("flaky123").await.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_database_error_propagates() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_deactivate()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = ShortenService::new(Arc::new(mock_repo), Arc::new(NullCache));

        let result = service.deactivate("anycode1").await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
