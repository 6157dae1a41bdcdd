//! API Module
//!
//! HTTP handlers and routing for the lookup server.
//!
//! # Endpoints
//! - `GET /` - Static landing page
//! - `GET /api/word/:word` - Aggregated lookup for a word
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
