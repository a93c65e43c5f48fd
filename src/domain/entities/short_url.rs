//! ShortUrl entity representing a shortened URL record.

use chrono::{DateTime, Utc};

/// A persisted short URL record.
///
/// The database owns the authoritative record; the cache tier only ever holds
/// a derived, expiring copy of `short_code -> original_url` for active records.
/// `original_url` is immutable after creation and `short_code` is unique
/// across all records regardless of `is_active`, so codes are never reused
/// even after deactivation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            is_active,
            created_at,
        }
    }
}

/// Input data for creating a new short URL record.
///
/// `is_active` is not part of the input: records always start active.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub short_code: String,
    pub original_url: String,
}
