use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cognito_auth_core::{ErrorCategory, IdentityProviderError, ServiceError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Service {
        category: ErrorCategory,
        message: String,
    },

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// HTTP status for a failure category.
///
/// `None` and `ProviderError` have no entry: a request should never reach the
/// boundary with either, so callers treat them as internal errors.
pub fn status_for(category: ErrorCategory) -> Option<StatusCode> {
    match category {
        ErrorCategory::InvalidParameter => Some(StatusCode::BAD_REQUEST),
        ErrorCategory::Unauthorized => Some(StatusCode::UNAUTHORIZED),
        ErrorCategory::NotFound => Some(StatusCode::NOT_FOUND),
        ErrorCategory::Conflict => Some(StatusCode::CONFLICT),
        ErrorCategory::LimitExceeded | ErrorCategory::TooManyFailedAttempts => {
            Some(StatusCode::TOO_MANY_REQUESTS)
        }
        ErrorCategory::None | ErrorCategory::ProviderError => None,
    }
}

fn internal_server_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            ApiError::Service { category, message } => match status_for(category) {
                Some(status_code) => (status_code, message),
                None => {
                    tracing::error!(?category, %message, "Failure category has no HTTP status");
                    internal_server_error()
                }
            },

            ApiError::Unauthenticated(message) => (StatusCode::UNAUTHORIZED, message),

            ApiError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message),

            ApiError::UnexpectedError(error) => {
                tracing::error!(%error, "Request failed unexpectedly");
                internal_server_error()
            }
        };

        (status_code, Json(ErrorResponse { message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        let (category, message) = error.into_parts();
        ApiError::Service { category, message }
    }
}

impl From<IdentityProviderError> for ApiError {
    fn from(error: IdentityProviderError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}
