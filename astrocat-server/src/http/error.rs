//! API error types with IntoResponse
//!
//! Errors are converted to `{ "message": string }` JSON responses with the
//! matching status code. Storage failures are logged with their entity and
//! operation; the client only sees a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::{EntityKind, ValidationError};

/// Repository operation, used for logging and generic failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Client-facing message for a failed operation.
    pub fn failure_message(self, kind: EntityKind) -> String {
        match self {
            Self::List => format!("Error al obtener {}", kind.segment()),
            Self::Get => format!("Error al obtener {} por ID", kind.noun()),
            Self::Create => format!("Error al crear {}", kind.noun()),
            Self::Update => format!("Error al actualizar {}", kind.noun()),
            Self::Delete => format!("Error al eliminar {}", kind.noun()),
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request body was not valid JSON for the route (400)
    MalformedBody { detail: String },

    /// No row matches the id (404)
    NotFound { kind: EntityKind },

    /// Database error (500, logged)
    Storage {
        kind: EntityKind,
        op: Operation,
        source: DbError,
    },

    /// No database connection could be acquired (503, logged)
    Unavailable {
        kind: EntityKind,
        op: Operation,
        source: DbError,
    },

    /// Request exceeded the configured timeout (504)
    Timeout,

    /// Middleware failure other than a timeout (500, logged)
    Internal { detail: String },
}

impl ApiError {
    /// Wrap a repository failure, separating an unreachable database from a
    /// failing statement.
    pub fn storage(kind: EntityKind, op: Operation, source: DbError) -> Self {
        if source.is_unavailable() {
            Self::Unavailable { kind, op, source }
        } else {
            Self::Storage { kind, op, source }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::MalformedBody { detail } => format!("Cuerpo de la solicitud inválido: {}", detail),
            Self::NotFound { kind } => kind.not_found_message(),
            Self::Storage { kind, op, .. } => op.failure_message(*kind),
            Self::Unavailable { .. } => "Base de datos no disponible".to_owned(),
            Self::Timeout => "Tiempo de espera agotado".to_owned(),
            Self::Internal { .. } => "Error interno del servidor".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage { kind, op, source } => {
                // Log the actual error, return generic message
                tracing::error!(
                    entity = kind.segment(),
                    op = op.as_str(),
                    error = %source,
                    "database error"
                );
            }
            Self::Unavailable { kind, op, source } => {
                tracing::warn!(
                    entity = kind.segment(),
                    op = op.as_str(),
                    error = %source,
                    "database unavailable"
                );
            }
            Self::Timeout => {
                tracing::warn!("request timed out");
            }
            Self::Internal { detail } => {
                tracing::error!(error = %detail, "unhandled middleware error");
            }
            _ => {}
        }

        let status = self.status();
        (status, Json(json!({ "message": self.message() }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use std::io;
    use std::sync::{Arc, Mutex};

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Missing { field: "nombre" });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Faltan datos requeridos: nombre" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body_of(ApiError::NotFound { kind: EntityKind::Star }).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Estrella no encontrada" }));
    }

    #[tokio::test]
    async fn storage_error_is_generic_500() {
        let source = DbError::from(sqlx::Error::Protocol("relation \"galaxias\" does not exist".into()));
        let err = ApiError::storage(EntityKind::Galaxy, Operation::List, source);
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Error al obtener galaxias" }));
    }

    /// Writer that appends formatted events to a shared buffer
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn storage_error_is_logged_with_context() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let source = DbError::from(sqlx::Error::Protocol("deadlock detected".into()));
        let err = ApiError::storage(EntityKind::Galaxy, Operation::Delete, source);
        let response = tracing::subscriber::with_default(subscriber, || err.into_response());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let output = logs.contents();
        assert!(output.contains("ERROR"), "{}", output);
        assert!(output.contains("database error"), "{}", output);
        assert!(output.contains("galaxias"), "{}", output);
        assert!(output.contains("delete"), "{}", output);
        assert!(output.contains("deadlock detected"), "{}", output);
    }

    #[tokio::test]
    async fn pool_timeout_is_503() {
        let source = DbError::from(sqlx::Error::PoolTimedOut);
        let err = ApiError::storage(EntityKind::Star, Operation::Create, source);
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({ "message": "Base de datos no disponible" }));
    }

    #[tokio::test]
    async fn timeout_is_504_with_message() {
        let (status, body) = body_of(ApiError::Timeout).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body, json!({ "message": "Tiempo de espera agotado" }));
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            Operation::Get.failure_message(EntityKind::Star),
            "Error al obtener estrella por ID"
        );
        assert_eq!(
            Operation::Delete.failure_message(EntityKind::Galaxy),
            "Error al eliminar galaxia"
        );
    }
}
