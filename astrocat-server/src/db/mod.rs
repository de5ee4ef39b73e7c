//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool, injected into handlers through `AppState`
//! - One parameterized statement per repository call, no transactions
//! - Not-found is an empty result (`None` / zero rows), never an error

pub mod pool;
pub mod repos;

pub use pool::{create_pool, DbConfig};
pub use repos::*;
