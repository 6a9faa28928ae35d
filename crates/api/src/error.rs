use assetdesk_core::error::CoreError;
use assetdesk_db::store::StoreError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Message returned for every failure that is not the caller's fault.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Application-level error type for HTTP handlers and services.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce `{ "message": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `assetdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the asset store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request that could not be read (malformed JSON, bad path or query).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error. The message is logged, never returned.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
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

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": "Validation failed", "errors": errors }),
                ),
                err @ CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, json!({ "message": err.to_string() }))
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "message": msg })),
                CoreError::InvalidArgument(msg) => {
                    (StatusCode::BAD_REQUEST, json!({ "message": msg }))
                }
            },

            // --- Store errors ---
            AppError::Store(StoreError::Conflict(constraint)) => (
                StatusCode::CONFLICT,
                json!({
                    "message": format!("Duplicate value violates unique constraint: {constraint}")
                }),
            ),
            AppError::Store(StoreError::Database(err)) => {
                tracing::error!(error = %err, "Database error");
                unexpected()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                unexpected()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn unexpected() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": UNEXPECTED_ERROR_MESSAGE }),
    )
}
