//! astrocat-server: REST API over the star and galaxy catalog tables
//!
//! Every route validates its input, runs one parameterized SQL statement
//! through a repository and maps the outcome to a JSON response.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbConfig, DbError, EntityRepository};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Entity, EntityFields, EntityKind, EntityPayload, ValidationError};
