//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS
//! - Request tracing and a per-request timeout
//! - Graceful shutdown
//! - JSON `{message}` error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, Operation};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
