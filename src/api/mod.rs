//! API Module
//!
//! HTTP handlers and routing for the translation service.
//!
//! # Endpoints
//! - `GET /translate/:key` - Resolve a label in the `common` section
//! - `GET /translate/:section/:key` - Resolve a label
//! - `GET /translations/:lang` - Every section's labels for one language
//! - `GET /preferences` / `PUT /preferences` - Session language and provider
//! - `DELETE /cache` - Clear the translation cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
