//! Catalog endpoints, mounted once per table
//!
//! GET/POST `/{segment}`, GET/PUT/DELETE `/{segment}/{id}`. Each handler
//! validates, performs exactly one repository call and maps the outcome.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::EntityRepository;
use crate::http::error::{ApiError, Operation};
use crate::http::extractors::{EntityId, JsonBody};
use crate::models::{Entity, EntityPayload};

type Repo = Arc<dyn EntityRepository>;

/// Confirmation body for update and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /{segment} - list every row
async fn list_entities(State(repo): State<Repo>) -> Result<Json<Vec<Entity>>, ApiError> {
    let kind = repo.kind();
    let rows = repo
        .list()
        .await
        .map_err(|e| ApiError::storage(kind, Operation::List, e))?;

    Ok(Json(rows))
}

/// GET /{segment}/{id} - get a single row
async fn get_entity(
    State(repo): State<Repo>,
    EntityId(id): EntityId,
) -> Result<Json<Entity>, ApiError> {
    let kind = repo.kind();
    repo.get(id)
        .await
        .map_err(|e| ApiError::storage(kind, Operation::Get, e))?
        .map(Json)
        .ok_or(ApiError::NotFound { kind })
}

/// POST /{segment} - create a row
async fn create_entity(
    State(repo): State<Repo>,
    JsonBody(payload): JsonBody<EntityPayload>,
) -> Result<(StatusCode, Json<Entity>), ApiError> {
    let kind = repo.kind();
    let fields = payload.validate()?;
    let entity = repo
        .create(&fields)
        .await
        .map_err(|e| ApiError::storage(kind, Operation::Create, e))?;

    tracing::info!(entity = kind.segment(), id = entity.id, "created");
    Ok((StatusCode::CREATED, Json(entity)))
}

/// PUT /{segment}/{id} - replace all four fields of an existing row
async fn update_entity(
    State(repo): State<Repo>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<EntityPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = repo.kind();
    let fields = payload.validate()?;
    let affected = repo
        .update(id, &fields)
        .await
        .map_err(|e| ApiError::storage(kind, Operation::Update, e))?;

    if affected == 0 {
        return Err(ApiError::NotFound { kind });
    }

    tracing::info!(entity = kind.segment(), id, "updated");
    Ok(Json(MessageResponse {
        message: kind.updated_message(),
    }))
}

/// DELETE /{segment}/{id} - remove an existing row
async fn delete_entity(
    State(repo): State<Repo>,
    EntityId(id): EntityId,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = repo.kind();
    let affected = repo
        .delete(id)
        .await
        .map_err(|e| ApiError::storage(kind, Operation::Delete, e))?;

    if affected == 0 {
        return Err(ApiError::NotFound { kind });
    }

    tracing::info!(entity = kind.segment(), id, "deleted");
    Ok(Json(MessageResponse {
        message: kind.deleted_message(),
    }))
}

/// Routes for the table served by `repo`
pub fn router<S>(repo: Repo) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let segment = repo.kind().segment();

    Router::new()
        .route(&format!("/{}", segment), get(list_entities).post(create_entity))
        .route(
            &format!("/{}/{{id}}", segment),
            get(get_entity).put(update_entity).delete(delete_entity),
        )
        .with_state(repo)
}
