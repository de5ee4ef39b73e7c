//! PostgreSQL repository
//!
//! Statement text is fixed per table when the repository is built; the only
//! thing interpolated is the table name from `EntityKind`, never user input.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, EntityRepository};
use crate::models::{Entity, EntityFields, EntityKind};

struct Statements {
    list: String,
    get: String,
    insert: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            list: format!(
                "SELECT id, nombre, masa_estelar, tipo_de_estrella, origen_galactico \
                 FROM {table} ORDER BY id"
            ),
            get: format!(
                "SELECT id, nombre, masa_estelar, tipo_de_estrella, origen_galactico \
                 FROM {table} WHERE id = $1"
            ),
            insert: format!(
                "INSERT INTO {table} (nombre, masa_estelar, tipo_de_estrella, origen_galactico) \
                 VALUES ($1, $2, $3, $4) RETURNING id"
            ),
            update: format!(
                "UPDATE {table} \
                 SET nombre = $1, masa_estelar = $2, tipo_de_estrella = $3, origen_galactico = $4 \
                 WHERE id = $5"
            ),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

/// Repository for one catalog table backed by the shared pool
pub struct PgEntityRepository {
    pool: PgPool,
    kind: EntityKind,
    sql: Statements,
}

impl PgEntityRepository {
    pub fn new(pool: PgPool, kind: EntityKind) -> Self {
        Self {
            pool,
            kind,
            sql: Statements::for_table(kind.table()),
        }
    }
}

#[async_trait]
impl EntityRepository for PgEntityRepository {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn list(&self) -> Result<Vec<Entity>, DbError> {
        let rows = sqlx::query_as::<_, Entity>(&self.sql.list)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Entity>, DbError> {
        let row = sqlx::query_as::<_, Entity>(&self.sql.get)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, fields: &EntityFields) -> Result<Entity, DbError> {
        let (id,): (i64,) = sqlx::query_as(&self.sql.insert)
            .bind(fields.nombre.as_str())
            .bind(fields.masa_estelar.value())
            .bind(fields.tipo_de_estrella.as_str())
            .bind(fields.origen_galactico.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(Entity::from_fields(id, fields))
    }

    async fn update(&self, id: i64, fields: &EntityFields) -> Result<u64, DbError> {
        let result = sqlx::query(&self.sql.update)
            .bind(fields.nombre.as_str())
            .bind(fields.masa_estelar.value())
            .bind(fields.tipo_de_estrella.as_str())
            .bind(fields.origen_galactico.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
