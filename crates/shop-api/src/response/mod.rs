//! Response types and error handling for API endpoints
//!
//! Every error body has the shape `{ "message": ..., "error"?: ... }`.
//! Server errors are logged and answered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shop_common::{domain_status, AppError};
use shop_core::DomainError;
use shop_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Message returned for every 5xx response
pub const SERVER_ERROR_MESSAGE: &str = "Server error, please try again later.";

/// Message returned when the multipart upload fails
pub const UPLOAD_ERROR_MESSAGE: &str = "Error uploading file";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The multipart body could not be received or stored
    #[error("Error uploading file")]
    Upload(#[source] DomainError),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => domain_status(e),
            Self::Upload(_) => 400,
            Self::MissingAuth | Self::InvalidToken => 401,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Upload(_) => "UPLOAD_FAILED",
            Self::MissingAuth => "MISSING_AUTHORIZATION",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Wrap a failure raised while receiving an upload
    pub fn upload(err: DomainError) -> Self {
        Self::Upload(err)
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    fn from_error(err: &ApiError, status: StatusCode) -> Self {
        if status.is_server_error() {
            return Self {
                message: SERVER_ERROR_MESSAGE.to_string(),
                error: None,
            };
        }

        match err {
            ApiError::Upload(cause) => Self {
                message: UPLOAD_ERROR_MESSAGE.to_string(),
                error: Some(cause.to_string()),
            },
            other => Self {
                message: other.to_string(),
                error: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        let body = ErrorBody::from_error(&self, status);
        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
