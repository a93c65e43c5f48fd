//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ResolverService, ShortenService};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::PgUrlRepository;

/// Process-scoped resources and services shared across requests.
///
/// The pool and cache client are created once at startup and injected here;
/// no handler reaches for ambient globals. Cloning is cheap (everything is
/// behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub resolver_service: Arc<ResolverService<PgUrlRepository>>,
    pub shorten_service: Arc<ShortenService<PgUrlRepository>>,
    pub cache: Arc<dyn CacheService>,
    pub db: Arc<PgPool>,
    /// Externally visible base address used to compose `shortened_url`.
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services around the shared pool and cache.
    pub fn new(db: Arc<PgPool>, cache: Arc<dyn CacheService>, base_url: String) -> Self {
        let repository = Arc::new(PgUrlRepository::new(db.clone()));

        let resolver_service = Arc::new(ResolverService::new(repository.clone(), cache.clone()));
        let shorten_service = Arc::new(ShortenService::new(repository, cache.clone()));

        Self {
            resolver_service,
            shorten_service,
            cache,
            db,
            base_url,
        }
    }

    /// Composes the full short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }
}
