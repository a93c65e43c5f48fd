//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uses parameterized queries for SQL injection protection. Per-record write
/// serialization comes from the database's own transactional guarantees; the
/// repository adds no locking of its own.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let record = sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO urls (short_code, original_url)
            VALUES ($1, $2)
            RETURNING id, short_code, original_url, is_active, created_at
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_active_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let record = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, short_code, original_url, is_active, created_at
            FROM urls
            WHERE short_code = $1 AND is_active = TRUE
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError> {
        // The is_active guard makes repeated deactivation report NotFound
        // instead of silently succeeding.
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET is_active = FALSE
            WHERE short_code = $1 AND is_active = TRUE
            "#,
        )
        .bind(short_code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
