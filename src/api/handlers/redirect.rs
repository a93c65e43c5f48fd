//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the cache-aside resolver (cache first,
///    database on miss, best-effort cache repair)
/// 2. Return 307 Temporary Redirect to the original URL
///
/// # Errors
///
/// Returns 404 Not Found with a body identifying the unresolved short code
/// if no active record exists. Returns 500 on database faults; cache faults
/// never surface here.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.resolver_service.resolve(&short_code).await?;

    Ok(Redirect::temporary(&original_url))
}
