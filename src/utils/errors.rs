//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema y su conversión a
//! respuestas HTTP. Todas las variantes se responden con 400 y el mensaje
//! original en `{ "error": ... }`, que es el contrato que consumen los clientes.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Upload(#[from] std::io::Error),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    BadRequest(String),
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database",
            AppError::Upload(_) => "upload",
            AppError::MissingField(_) => "missing_field",
            AppError::BadRequest(_) => "bad_request",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(_) | AppError::Upload(_) => {
                tracing::error!(kind = self.kind(), "❌ {}", self);
            }
            AppError::MissingField(_) | AppError::BadRequest(_) => {
                tracing::warn!(kind = self.kind(), "⚠️ {}", self);
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: impl Into<String>) -> AppError {
    AppError::BadRequest(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_error_is_bad_request_with_verbatim_message() {
        let response = AppError::MissingField("name").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "name is required");
    }

    #[test]
    fn test_database_message_is_not_wrapped() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }

    #[test]
    fn test_io_error_becomes_upload() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert_eq!(err.kind(), "upload");
        assert_eq!(err.to_string(), "denied");
    }
}
