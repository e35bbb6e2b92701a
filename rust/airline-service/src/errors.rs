use airline_core::StoreError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::response::failure;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            StoreError::Constraint(msg) => AppError::Conflict(msg),
            StoreError::InvalidInput(msg) => AppError::BadRequest(msg),
            StoreError::UnknownSeed(_) | StoreError::Sqlite(_) => AppError::Internal(err.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rej: JsonRejection) -> Self {
        AppError::BadRequest(rej.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rej: PathRejection) -> Self {
        AppError::BadRequest(rej.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rej: QueryRejection) -> Self {
        AppError::BadRequest(rej.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => failure(StatusCode::BAD_REQUEST, "bad_request", msg),
            AppError::NotFound(msg) => failure(StatusCode::NOT_FOUND, "not_found", msg),
            AppError::MethodNotAllowed(msg) => failure(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", msg),
            AppError::Conflict(msg) => failure(StatusCode::CONFLICT, "conflict", msg),
            AppError::Internal(e) => {
                error!(error = %e, "request failed");
                failure(StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string())
            }
        }
    }
}
