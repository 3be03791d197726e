//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

/// Failures of the data accessor. Every store call is attempted once.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("pet {0} not found")]
    NotFound(i64),
    #[error("constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        /// True when a uniqueness rule was broken (as opposed to a missing or malformed field).
        unique: bool,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                let integrity = db_err.code().map(|c| c.starts_with("23")).unwrap_or(false);
                if integrity {
                    StoreError::ConstraintViolation {
                        message: db_err.message().to_string(),
                        unique: db_err.is_unique_violation(),
                    }
                } else {
                    StoreError::Unavailable(db_err.message().to_string())
                }
            }
            // Rows are only ever fetched optionally, so this never stands for a missing pet.
            _ => StoreError::Unavailable(err.to_string()),
        }
    }
}

/// Errors that abort the process at startup or shutdown.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("migrate database: {0}")]
    Migrate(#[source] sqlx::Error),
    #[error("bind listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
    #[error("in-flight requests did not drain within {0:?}")]
    ShutdownTimeout(std::time::Duration),
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),
    #[error("request body too large: {0}")]
    PayloadTooLarge(String),
    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String, unique: bool },
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(format!("pet {}", id)),
            StoreError::ConstraintViolation { message, unique } => {
                AppError::ConstraintViolation { message, unique }
            }
            StoreError::Unavailable(msg) => AppError::Unavailable(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // The body limit surfaces here as a failure to buffer the body.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(rejection.body_text());
        }
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            AppError::ConstraintViolation { unique: true, .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::ConstraintViolation { unique: false, .. } => {
                (StatusCode::BAD_REQUEST, "constraint_violation")
            }
            AppError::Unavailable(_) => (StatusCode::INTERNAL_SERVER_ERROR, "unavailable"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
