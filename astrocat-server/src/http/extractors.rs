//! Custom Axum extractors
//!
//! Both turn axum's plain-text rejections into `ApiError` so every 4xx
//! carries a `{message}` body.

use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::db::EntityRepository;

/// Numeric row id from the path.
///
/// An id that cannot name a row (not an integer, or outside `i64`) is
/// answered like any id that was never inserted: 404 for the table behind
/// the route.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

impl FromRequestParts<Arc<dyn EntityRepository>> for EntityId {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        repo: &Arc<dyn EntityRepository>,
    ) -> Result<Self, Self::Rejection> {
        let kind = repo.kind();

        let Path(raw): Path<String> = Path::from_request_parts(parts, repo)
            .await
            .map_err(|_| ApiError::NotFound { kind })?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::NotFound { kind })
    }
}

/// JSON body whose rejection is reported as a 400 `ApiError`
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody {
                detail: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
