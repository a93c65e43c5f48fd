//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// The durable store is the correctness authority: failures here propagate to
/// callers as [`AppError::Internal`], unlike cache faults which degrade.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new URL record in a single atomic statement.
    ///
    /// The record is either fully persisted with its final `short_code` and
    /// visible to readers, or not persisted at all.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_code` already exists (the
    /// uniqueness constraint covers deactivated records too).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds an active record by its short code.
    ///
    /// Deactivated records are filtered out: to every external consumer an
    /// inactive code resolves as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Deactivates a record by setting `is_active = false`.
    ///
    /// Returns `Ok(true)` if an active record was found and deactivated,
    /// `Ok(false)` if no active record matches. The row is never removed;
    /// deactivation is a logical tombstone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, short_code: &str) -> Result<bool, AppError>;
}
