//! API route configuration.

use crate::api::handlers::{create_url_handler, delete_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// REST API routes.
///
/// # Endpoints
///
/// - `POST   /urls`               - Create a shortened URL
/// - `DELETE /urls/{short_code}`  - Deactivate a shortened URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler))
        .route("/urls/{short_code}", delete(delete_url_handler))
}
