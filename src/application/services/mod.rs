//! Application services implementing the cache-aside protocol.

mod resolver_service;
mod shorten_service;

pub use resolver_service::ResolverService;
pub use shorten_service::ShortenService;
