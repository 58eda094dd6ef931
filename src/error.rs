//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
    #[error("malformed auth token entry '{0}' (expected token=email)")]
    MalformedToken(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: String },
    #[error("Access Denied")]
    AccessDenied,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        AppError::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }

    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ConfigurationException"),
            AppError::EntityNotFound { .. } => (StatusCode::NOT_FOUND, "EntityNotFoundException"),
            AppError::AccessDenied => (StatusCode::FORBIDDEN, "AccessDeniedException"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseException"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError"),
        }
    }
}

/// Body of every error response: `{"type": ..., "message": ...}`.
#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_type();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            kind: kind.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
