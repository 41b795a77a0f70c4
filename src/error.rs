// src/error.rs

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::utils::json::Indented;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error, empty body
    MissingPayload,

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl AppError {
    /// The 404 raised when `resource` has no row with the requested id.
    pub fn not_found(resource: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} ID {} has not been found", resource, id))
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    pub error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingPayload => write!(f, "request payload missing or unreadable"),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::InternalServerError(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// A missing payload is an undifferentiated 500 with no body; everything
/// else carries an indented `{ "Error": ... }` document.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingPayload => {
                tracing::warn!("Rejected request with missing payload");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        let body = Indented(ErrorBody {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// An absent, non-JSON or undecodable body all count as a missing payload.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!("Payload rejected: {}", err.body_text());
        AppError::MissingPayload
    }
}

/// A path segment that does not parse (e.g. `/api/quiz/abc`) addresses no
/// resource.
impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        tracing::debug!("Path rejected: {}", err.body_text());
        AppError::NotFound("Resource not found".to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
