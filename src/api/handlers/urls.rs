//! Handlers for URL management endpoints (create, deactivate).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "url_to_shorten": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "shortened_url": "https://s.example.com/aB3xY9_k",
///   "is_active": true
/// }
/// ```
///
/// # Cache
///
/// Creation never writes to the cache; the first redirect for the new code
/// populates it (cache-aside).
///
/// # Errors
///
/// Returns 400 Bad Request if `url_to_shorten` fails URL-syntax validation;
/// nothing is persisted in that case.
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let record = state.shorten_service.create(&payload.url_to_shorten).await?;

    let shortened_url = state.short_url(&record.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            original_url: record.original_url,
            shortened_url,
            is_active: record.is_active,
        }),
    ))
}

/// Deactivates a short URL.
///
/// # Endpoint
///
/// `DELETE /api/urls/{short_code}`
///
/// # Behavior
///
/// - The record is **not** removed from the database; `is_active` is set to
///   false. The code is never reused.
/// - The database commits first, then the cache entry is invalidated
///   best-effort. If invalidation fails, redirects may serve the old URL
///   until the cache entry's TTL expires.
/// - Subsequent redirect requests for this code return **404 Not Found**.
///
/// # Errors
///
/// Returns 404 Not Found if no active record matches the code.
pub async fn delete_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.shorten_service.deactivate(&short_code).await?;

    Ok(StatusCode::NO_CONTENT)
}
