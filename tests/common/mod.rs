#![allow(dead_code)]

use async_trait::async_trait;
use shortify::infrastructure::cache::{CacheError, CacheResult, CacheService, NullCache};
use shortify::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://s.test.com";

/// A cache whose every operation fails.
///
/// Used to verify the degrade-don't-fail policy: with the cache tier fully
/// unreachable, every endpoint must behave exactly as with caching disabled.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn get_url(&self, _short_code: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set_url(
        &self,
        _short_code: &str,
        _original_url: &str,
        _ttl: Option<usize>,
    ) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn invalidate(&self, _short_code: &str) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(NullCache),
        TEST_BASE_URL.to_string(),
    )
}

pub fn create_test_state_with_failing_cache(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(FailingCache),
        TEST_BASE_URL.to_string(),
    )
}

pub async fn create_test_url(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_inactive_url(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url, is_active) VALUES ($1, $2, FALSE)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn is_active(pool: &PgPool, code: &str) -> Option<bool> {
    sqlx::query_scalar("SELECT is_active FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}
