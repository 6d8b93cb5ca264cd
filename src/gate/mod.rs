//! API key gate service module
//!
//! Puts the `ApiKey` header extractor in front of an axum router.
//!
//! # Endpoints
//! - `GET /health` - Liveness probe
//! - `GET /v1/whoami` - Masked echo of the presented key
//!
//! # Usage example
//! ```rust,ignore
//! let app = gate::create_router();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

mod handlers;
mod middleware;
mod router;
pub mod types;

pub use router::create_router;
