//! HTTP request handlers.

mod health;
mod redirect;
mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use urls::{create_url_handler, delete_url_handler};
