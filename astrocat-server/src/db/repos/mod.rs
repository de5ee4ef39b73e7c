//! Repository implementations for database access
//!
//! Each repository serves exactly one table and follows these patterns:
//! - One parameterized statement per call (positional binds only)
//! - Lookups return `Option`, mutations return the affected row count
//! - Driver failures surface as `DbError`; callers decide the HTTP mapping

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Entity, EntityFields, EntityKind};

pub use memory::MemoryEntityRepository;
pub use postgres::PgEntityRepository;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Whether the failure means no connection could be used at all, as
    /// opposed to a failing statement.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Sqlx(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::WorkerCrashed
            ),
        }
    }
}

/// CRUD access to one catalog table (testable)
#[async_trait]
pub trait EntityRepository: Send + Sync + 'static {
    /// Table this repository serves.
    fn kind(&self) -> EntityKind;

    /// All rows in storage order.
    async fn list(&self) -> Result<Vec<Entity>, DbError>;

    /// Zero or one row.
    async fn get(&self, id: i64) -> Result<Option<Entity>, DbError>;

    /// Insert a row, returning it with its assigned id.
    async fn create(&self, fields: &EntityFields) -> Result<Entity, DbError>;

    /// Replace all four columns. Returns rows affected (0 or 1).
    async fn update(&self, id: i64, fields: &EntityFields) -> Result<u64, DbError>;

    /// Remove a row. Returns rows affected (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}
